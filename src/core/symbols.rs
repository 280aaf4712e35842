//! Display symbols for common currencies

pub fn symbol_for(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "AUD" => "A$",
        "CAD" => "C$",
        "CHF" => "CHF",
        "CNY" => "¥",
        "SEK" => "kr",
        "NZD" => "NZ$",
        "MXN" => "$",
        "SGD" => "S$",
        "HKD" => "HK$",
        "NOK" => "kr",
        "KRW" => "₩",
        "INR" => "₹",
        "BRL" => "R$",
        "ZAR" => "R",
        "AED" => "د.إ",
        "SAR" => "﷼",
        "QAR" => "﷼",
        "KWD" => "د.ك",
        "BHD" => ".د.ب",
        "OMR" => "ر.ع.",
        "JOD" => "د.ا",
        "ILS" => "₪",
        "PKR" => "₨",
        "LKR" => "Rs",
        "THB" => "฿",
        "MYR" => "RM",
        "PHP" => "₱",
        "IDR" => "Rp",
        "VND" => "₫",
        "BDT" => "Tk",
        "NGN" => "₦",
        "GHS" => "₵",
        "KES" => "KSh",
        "ZWL" => "Z$",
        _ => return None,
    };
    Some(symbol)
}

/// Symbol for an upper-cased code, falling back to the code itself.
pub fn currency_symbol(code: &str) -> String {
    symbol_for(code).unwrap_or(code).to_string()
}
