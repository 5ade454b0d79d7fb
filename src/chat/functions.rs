//! Function calling. The provider may only invoke functions compiled
//! into the `RegisteredFunction` enum; names outside that set are
//! rejected before anything runs.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::openai::{FunctionCallSpec, FunctionDecl, Parameters, Property};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no registered function named '{0}'")]
    UnknownFunction(String),
    #[error("malformed function arguments: {source}")]
    ParseError {
        #[source]
        source: serde_json::Error,
    },
}

/// The closed set of functions reachable from a provider response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegisteredFunction {
    GetCurrentWeather,
}

impl RegisteredFunction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "get_current_weather" => Some(Self::GetCurrentWeather),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::GetCurrentWeather => "get_current_weather",
        }
    }
}

#[derive(Deserialize, Default, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Unit {
    Celsius,
    #[default]
    Fahrenheit,
}

#[derive(Deserialize)]
struct WeatherArgs {
    location: String,
    #[serde(default)]
    unit: Unit,
}

/// Resolves the function named in `spec` against the registered set,
/// parses its JSON-encoded arguments, and runs it.
pub fn dispatch(spec: &FunctionCallSpec) -> Result<String, DispatchError> {
    let function = RegisteredFunction::from_name(&spec.name)
        .ok_or_else(|| DispatchError::UnknownFunction(spec.name.clone()))?;

    match function {
        RegisteredFunction::GetCurrentWeather => {
            let args: WeatherArgs = serde_json::from_str(&spec.arguments)
                .map_err(|source| DispatchError::ParseError { source })?;
            Ok(get_current_weather(&args.location, args.unit))
        }
    }
}

// Hardcoded stub. In production this would call a weather backend or
// external API that honors the requested unit.
fn get_current_weather(location: &str, _unit: Unit) -> String {
    format!("The weather in {} is hot and sunny.", location)
}

/// Function declarations in the shape the completion API expects, one
/// per registered function.
pub fn declarations() -> Value {
    let weather = FunctionDecl {
        name: RegisteredFunction::GetCurrentWeather.name().to_string(),
        description: "Get the current weather in a given location".to_string(),
        parameters: Parameters {
            r#type: "object".to_string(),
            properties: WeatherProps {
                location: Property {
                    r#type: "string".to_string(),
                    description: "The city and state, e.g. San Francisco, CA".to_string(),
                    r#enum: None,
                },
                unit: Property {
                    r#type: "string".to_string(),
                    description: "Temperature unit".to_string(),
                    r#enum: Some(vec!["celsius".to_string(), "fahrenheit".to_string()]),
                },
            },
            required: vec!["location".to_string()],
        },
    };
    json!([weather])
}

#[derive(Serialize)]
struct WeatherProps {
    location: Property,
    unit: Property,
}
