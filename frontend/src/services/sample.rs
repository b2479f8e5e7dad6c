//! Bundled demo clients.
//!
//! The card never fetches data; the demo page renders this fixed set.
//! Creation dates are stored as "days ago" so deadlines stay meaningful
//! whenever the page is opened.

use chrono::{DateTime, Duration, Utc};
use clientcard::{Client, ClientCategory, PaymentProgress, StaticPayments};
use serde::Deserialize;

use crate::types::{AppResult, ClientRow};

const SAMPLE_CLIENTS: &str = r#"[
    {
        "category": "building",
        "createdDaysAgo": 6,
        "payment": { "progress": 60, "remainingAmount": 1400000 },
        "client": {
            "id": "c-101", "firstName": "Ерлан", "lastName": "Нурланов",
            "phone": "+7 705 111 22 33", "objectName": "Коттедж, Бесагаш",
            "totalAmount": 3500000, "constructionDays": 10, "isIconsVisible": true
        }
    },
    {
        "category": "building",
        "createdDaysAgo": 11,
        "payment": { "progress": 35, "remainingAmount": 2925000 },
        "client": {
            "id": "c-102", "firstName": "Айгерим", "lastName": "Садыкова",
            "phone": "+7 701 000 00 00", "objectName": "Баня",
            "totalAmount": 4500000, "constructionDays": 10
        }
    },
    {
        "category": "building",
        "createdDaysAgo": 3,
        "client": {
            "id": "c-103", "firstName": "Ольга", "lastName": "Ким",
            "phone": "+7 777 123 45 67",
            "totalAmount": 12750000.5, "constructionDays": 120, "isIconsVisible": true
        }
    },
    {
        "category": "deposit",
        "createdDaysAgo": 40,
        "payment": { "progress": 10, "remainingAmount": 2250000 },
        "client": {
            "id": "c-201", "firstName": "Тимур", "lastName": "Ахметов",
            "phone": "+7 702 555 66 77", "objectName": "Гараж",
            "totalAmount": 2500000, "constructionDays": 30
        }
    },
    {
        "category": "built",
        "payment": { "progress": 100, "remainingAmount": 0 },
        "client": {
            "id": "c-301", "firstName": "Дана", "lastName": "Омарова",
            "phone": "+7 708 999 00 11", "objectName": "Дом на Абая",
            "totalAmount": 18000000, "constructionDays": 150, "isIconsVisible": true
        }
    }
]"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampleEntry {
    category: ClientCategory,
    #[serde(default)]
    created_days_ago: Option<i64>,
    #[serde(default)]
    payment: Option<PaymentProgress>,
    client: Client,
}

/// Demo rows and their payment figures, with creation dates relative to `now`.
pub fn load_sample(now: DateTime<Utc>) -> AppResult<(Vec<ClientRow>, StaticPayments)> {
    let entries: Vec<SampleEntry> = serde_json::from_str(SAMPLE_CLIENTS)
        .map_err(clientcard::ClientError::from)?;

    let mut payments = StaticPayments::new();
    let mut rows = Vec::with_capacity(entries.len());

    for entry in entries {
        let mut client = entry.client;
        if let Some(days) = entry.created_days_ago {
            client.created_at = Some(now - Duration::days(days));
        }
        if let Err(e) = client.validate() {
            log::warn!("⚠️ {}", e);
        }
        if let Some(payment) = entry.payment {
            payments.insert(client.id.clone(), payment);
        }
        rows.push(ClientRow { client, category: entry.category });
    }

    log::info!("📦 Loaded {} sample clients", rows.len());
    Ok((rows, payments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clientcard::{DeadlineStatus, PaymentTracker};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_loads() {
        let (rows, payments) = load_sample(now()).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(payments.len(), 4);
        assert!(rows.iter().all(|row| row.client.validate().is_ok()));
    }

    #[test]
    fn test_sample_dates_are_relative() {
        let (rows, _) = load_sample(now()).unwrap();
        assert_eq!(rows[0].client.created_at, Some(now() - Duration::days(6)));
        assert_eq!(rows[4].client.created_at, None);
    }

    #[test]
    fn test_sample_covers_deadline_states() {
        let (rows, _) = load_sample(now()).unwrap();
        let status = |i: usize| DeadlineStatus::evaluate(&rows[i].client, rows[i].category, now());

        assert!(status(0).near && !status(0).passed);
        assert!(status(1).passed);
        assert!(!status(2).is_alert());
        assert!(!status(3).is_alert());
    }

    #[test]
    fn test_sample_payment_lookup() {
        let (rows, payments) = load_sample(now()).unwrap();
        assert!(payments.progress(&rows[4].client).is_complete());
        assert_eq!(payments.progress(&rows[2].client), PaymentProgress::default());
    }
}
