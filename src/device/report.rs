use serde::Deserialize;
use serde_json::Value;

/// One poll of the controller's state endpoint.
///
/// The firmware makes no promises about which fields are present or what
/// type they carry, so everything decodes as a raw JSON value and the
/// display contract is loose truthiness: absent, null, `false`, `0` and
/// the empty string all count as "nothing to show".
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StateReport {
    #[serde(default)]
    pub set_temp: Value,
    #[serde(default)]
    pub cur_temp: Value,
    #[serde(default)]
    pub pump: Value,
    #[serde(default)]
    pub heater: Value,
}

impl StateReport {
    pub fn target_temp(&self) -> Option<String> {
        truthy_scalar(&self.set_temp)
    }

    pub fn current_temp(&self) -> Option<String> {
        truthy_scalar(&self.cur_temp)
    }

    pub fn pump_on(&self) -> bool {
        !is_falsy(&self.pump)
    }

    pub fn heater_on(&self) -> bool {
        !is_falsy(&self.heater)
    }
}

fn truthy_scalar(value: &Value) -> Option<String> {
    match is_falsy(value) {
        true => None,
        false => Some(scalar_text(value)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(enabled) => !*enabled,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}
