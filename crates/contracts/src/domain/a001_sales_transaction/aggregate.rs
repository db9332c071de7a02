use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Строка продажи (одна позиция накладной) из очищенного датасета.
///
/// Revenue и признак возврата сюда не входят: они всегда вычисляются
/// из `quantity` и `unit_price` на стороне backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTransaction {
    /// Номер накладной (повторяется для каждой позиции)
    #[serde(rename = "invoiceNo")]
    pub invoice_no: String,

    /// Покупатель, может отсутствовать
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,

    /// Наименование товара, может отсутствовать
    pub description: Option<String>,

    pub country: String,

    /// Дата и время операции
    pub date: NaiveDateTime,

    /// Количество (отрицательное для возвратов)
    pub quantity: i64,

    /// Цена за единицу
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}
