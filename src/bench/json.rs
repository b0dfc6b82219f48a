use crate::bench::{BenchSettings, SettingsError};
use std::io::Write;
use std::{fs::File, io, io::Read};

impl From<SettingsError> for io::Error {
    fn from(e: SettingsError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

impl BenchSettings {
    /// Parse settings from a JSON object.
    ///
    /// Unrecognized keys are ignored and missing keys take their defaults.
    /// The parsed values are validated.
    pub fn from_json_str(json: &str) -> Result<Self, io::Error> {
        let settings: BenchSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        Self::from_json_str(&buffer)
    }

    pub fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[test]
fn test_json_settings() {
    use crate::bench::ValidationPolicy;

    let settings = BenchSettings::from_json_str(
        r#"{"verbose": false, "time_limit": 2.5, "max_iter": 100,
            "validation_policy": "solution_present"}"#,
    )
    .unwrap();
    assert_eq!(settings.verbose, Some(false));
    assert_eq!(settings.time_limit, Some(2.5));
    assert_eq!(settings.high_accuracy, None);
    assert_eq!(settings.validation_policy, ValidationPolicy::SolutionPresent);

    assert_eq!(
        BenchSettings::from_json_str("{}").unwrap(),
        BenchSettings::default()
    );

    let err = BenchSettings::from_json_str(r#"{"time_limit": -1.0}"#).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn test_json_file_io() {
    use std::io::{Seek, SeekFrom};

    let settings = crate::bench::BenchSettingsBuilder::default()
        .high_accuracy(true)
        .time_limit(10.)
        .build()
        .unwrap();

    let mut file = tempfile::tempfile().unwrap();
    settings.write_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let settings2 = BenchSettings::read_from_file(&mut file).unwrap();
    assert_eq!(settings, settings2);
}
