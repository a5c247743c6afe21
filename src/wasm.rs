use wasm_bindgen::prelude::*;

use crate::{config::TableConfig, error::TableError, table::Table};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

fn table_err(err: TableError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A table driven from JavaScript. Every call returns the fresh `TableView`.
#[wasm_bindgen]
pub struct WasmTable {
    inner: Table,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue) -> Result<WasmTable, JsValue> {
        console_error_panic_hook::set_once();
        let config: TableConfig = if params.is_undefined() || params.is_null() {
            TableConfig::default()
        } else {
            serde_wasm_bindgen::from_value(params.clone())
                .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?
        };
        config
            .validate()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(WasmTable {
            inner: Table::from_config(&config),
        })
    }

    #[wasm_bindgen(js_name = placeBet)]
    pub fn place_bet(&mut self, amount: u32) -> Result<JsValue, JsValue> {
        self.inner.place_bet(u64::from(amount)).map_err(table_err)?;
        self.view()
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        self.inner.hit().map_err(table_err)?;
        self.view()
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        self.inner.stand().map_err(table_err)?;
        self.view()
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.view())
    }
}
