use std::{fs, path::Path};

use json::{JsonValue, object};

use crate::{
    dithering::DitherMethod,
    error::{MonoditherError, Result},
};

/// Settings for one offline run, read from a JSON file.
///
/// ```json
/// { "dithering_type": "floyd_steinberg", "output_scale": 2 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessConfig {
    pub dithering_type: DitherMethod,
    /// nearest neighbour upscale applied after dithering, 1 keeps the size
    pub output_scale: u32,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            dithering_type: DitherMethod::None,
            output_scale: 1,
        }
    }
}

impl ProcessConfig {
    pub fn from_json_str(json_string: &str) -> Result<ProcessConfig> {
        let json = json::parse(json_string)?;
        if !json.is_object() {
            return Err(config_error("config should be a JSON object"));
        }

        // unknown names fall back to none inside from_name
        let dithering_type = match &json["dithering_type"] {
            JsonValue::Null => DitherMethod::None,
            value => match value.as_str() {
                Some(name) => DitherMethod::from_name(name),
                None => match value.as_i32() {
                    Some(id) => DitherMethod::from_id(id),
                    None => return Err(config_error("Couldn't parse dithering_type")),
                },
            },
        };

        let output_scale = if json["output_scale"].is_null() {
            1
        } else {
            match json["output_scale"].as_u32() {
                Some(0) => return Err(config_error("output_scale should be at least 1")),
                Some(val) => val,
                None => return Err(config_error("Couldn't parse output_scale")),
            }
        };

        Ok(ProcessConfig {
            dithering_type,
            output_scale,
        })
    }

    pub fn to_json(&self) -> String {
        let data = object! {
            dithering_type: self.dithering_type,
            output_scale: self.output_scale,
        };
        data.pretty(2)
    }

    pub fn read_config<P: AsRef<Path>>(path: P) -> Result<ProcessConfig> {
        let json_string = fs::read_to_string(path)?;
        ProcessConfig::from_json_str(&json_string)
    }

    pub fn write_config<P: AsRef<Path>>(&self, path: P) -> Result {
        fs::write(path, self.to_json())?;
        Ok(())
    }
}

impl From<DitherMethod> for JsonValue {
    fn from(method: DitherMethod) -> Self {
        JsonValue::String(method.to_string())
    }
}

fn config_error(msg: &str) -> MonoditherError {
    MonoditherError::Config(String::from(msg))
}
