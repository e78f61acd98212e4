//! Row types read and written by the importer and the reporter

use serde::{Deserialize, Serialize};

/// Category label written on every converted value
pub const CATEGORY_LABEL: &str = "Real";

/// `Sucesso` value of a run that finished and sorted correctly
pub const SUCCESS_MARKER: &str = "Sim";

/// One row of a converted dataset (`ID,Valor,Categoria`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRecord {
    /// 1-based position among the valid source rows
    #[serde(rename = "ID")]
    pub id: u64,
    /// Coerced numeric value
    #[serde(rename = "Valor")]
    pub value: f64,
    /// Always [`CATEGORY_LABEL`]
    #[serde(rename = "Categoria")]
    pub category: String,
}

impl ValueRecord {
    /// Create a record with the fixed category label
    pub fn new(id: u64, value: f64) -> Self {
        Self {
            id,
            value,
            category: CATEGORY_LABEL.to_string(),
        }
    }
}

/// One benchmark run as written by the benchmark harness
///
/// Columns are matched by header name, so file column order is irrelevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Algorithm name, e.g. `Quick Sort` or `std::sort`
    #[serde(rename = "Algoritmo")]
    pub algorithm: String,
    /// Number of elements sorted
    #[serde(rename = "Tamanho_Array")]
    pub size: u64,
    /// Wall-clock time in milliseconds
    #[serde(rename = "Tempo_ms")]
    pub time_ms: f64,
    /// `Sim` or `Nao`
    #[serde(rename = "Sucesso")]
    pub status: String,
}

impl BenchmarkRecord {
    /// Create a record
    pub fn new(algorithm: impl Into<String>, size: u64, time_ms: f64, success: bool) -> Self {
        Self {
            algorithm: algorithm.into(),
            size,
            time_ms,
            status: if success { SUCCESS_MARKER } else { "Nao" }.to_string(),
        }
    }

    /// Whether this run counts towards charts and tables
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_MARKER
    }
}
