//! 価格表示と購入リンク

use crate::types::ProjectRecord;

/// "฿1,100"
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("฿{}", grouped)
}

/// 割引率（%）。元値が価格以下なら None
pub fn discount_percent(price: u32, original: Option<u32>) -> Option<u32> {
    let original = original.filter(|o| *o > price)?;
    let percent = (f64::from(original - price) / f64::from(original) * 100.0).round();
    Some(percent as u32)
}

/// 購入問い合わせの mailto リンク
pub fn purchase_mailto(email: &str, project: &ProjectRecord) -> String {
    let subject = format!("Order {}", project.id);
    format!("mailto:{}?subject={}", email, encode_component(&subject))
}

fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "฿0");
        assert_eq!(format_price(999), "฿999");
        assert_eq!(format_price(1100), "฿1,100");
        assert_eq!(format_price(1234567), "฿1,234,567");
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent(1100, Some(1499)), Some(27));
        assert_eq!(discount_percent(1100, None), None);
        assert_eq!(discount_percent(1100, Some(1100)), None);
        assert_eq!(discount_percent(1100, Some(900)), None);
    }

    #[test]
    fn test_purchase_mailto() {
        let project: ProjectRecord = serde_json::from_value(serde_json::json!({
            "id": "AI APP & FULL STACK-01",
            "displayIndex": "01",
            "category": "AI APP & FULL STACK",
            "price": 2500,
            "primaryImage": "x.png",
        }))
        .unwrap();
        assert_eq!(
            purchase_mailto("support@codestore.dev", &project),
            "mailto:support@codestore.dev?subject=Order%20AI%20APP%20%26%20FULL%20STACK-01"
        );
    }
}
