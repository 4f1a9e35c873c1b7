//! Create-player form decoding.
//!
//! The specialization checkboxes post a repeated `specs` key, which
//! serde-based `Form` extraction cannot express, so the raw body is
//! decoded with `form_urlencoded`.

use mesa_domain::Attributes;

use super::error::ApiError;

#[derive(Debug)]
pub struct CreatePlayerForm {
    pub name: String,
    pub age: String,
    pub attributes: Attributes,
    pub specs: Vec<String>,
}

impl CreatePlayerForm {
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        let mut name = None;
        let mut age = None;
        let mut attrs: [Option<i32>; 5] = [None; 5];
        let mut specs = Vec::new();

        for (key, value) in url::form_urlencoded::parse(body) {
            let slot = match key.as_ref() {
                "name" => {
                    name = Some(value.into_owned());
                    continue;
                }
                "age" => {
                    age = Some(value.into_owned());
                    continue;
                }
                "specs" => {
                    specs.push(value.into_owned());
                    continue;
                }
                "vig" => 0,
                "agi" => 1,
                "int" => 2,
                "per" => 3,
                "pre" => 4,
                _ => continue,
            };
            let parsed: i32 = value
                .parse()
                .map_err(|_| ApiError::BadRequest(format!("Invalid value for {key}: {value}")))?;
            attrs[slot] = Some(parsed);
        }

        let name = name.ok_or_else(|| missing("name"))?;
        let age = age.ok_or_else(|| missing("age"))?;
        let [vig, agi, int, per, pre] = attrs;
        let attributes = Attributes::new(
            vig.ok_or_else(|| missing("vig"))?,
            agi.ok_or_else(|| missing("agi"))?,
            int.ok_or_else(|| missing("int"))?,
            per.ok_or_else(|| missing("per"))?,
            pre.ok_or_else(|| missing("pre"))?,
        );

        Ok(Self {
            name,
            age,
            attributes,
            specs,
        })
    }
}

fn missing(field: &str) -> ApiError {
    ApiError::BadRequest(format!("Missing field: {field}"))
}
