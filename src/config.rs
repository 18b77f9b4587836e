use ini;
use std;

use alg::Vec3;
use matrix;

pub const DEFAULT_CONFIG_PATH: &str = "rest.ini";
pub const CONFIG_PATH_VAR: &str = "REST_MATRIX_CONFIG";

const SECTION: &str = "rest";

lazy_static! {
    pub static ref REST_CONFIG: RestParams = load_or_default(&config_path());
}

/// Errors raised while loading rest parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The config file could not be read.
    Io(String),

    /// The file is not valid INI.
    Parse(String),

    /// A setting is present but is not a number.
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Io(msg) => write!(out, "could not read config: {}", msg),
            Error::Parse(msg) => write!(out, "malformed config: {}", msg),
            Error::InvalidValue { section, key, value } => write!(
                out,
                "setting \"{}\" in section \"{}\" is not a number: \"{}\"",
                key, section, value,
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Inputs of the parameterized rest transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestParams {
    pub rotation: f64,
    pub scale: f64,
}

impl Default for RestParams {
    fn default() -> RestParams {
        RestParams {
            rotation: matrix::REST_ROTATION,
            scale: matrix::REST_SCALE,
        }
    }
}

impl RestParams {
    pub fn new(rotation: f64, scale: f64) -> RestParams {
        RestParams { rotation, scale }
    }

    /// Scale, then rotate. Default parameters match `matrix::rest_matrix`.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        matrix::mul_mat_vec(
            matrix::rotation(self.rotation),
            matrix::mul_mat_vec(matrix::scale(self.scale), v),
        )
    }
}

/// Config file location, honoring the override variable.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_VAR)
        .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_config(filename: &str) -> Result<RestParams> {
    let text = std::fs::read_to_string(filename)
        .map_err(|err| Error::Io(format!("{}: {}", filename, err)))?;

    let params = parse_config(&text)?;
    debug!("Loaded rest parameters from {}: {:?}", filename, params);

    Ok(params)
}

/// Like `load_config`, but falls back to the defaults on any error.
pub fn load_or_default(filename: &str) -> RestParams {
    load_config(filename).unwrap_or_else(|err| {
        warn!("Using default rest parameters ({}): {}", filename, err);
        RestParams::default()
    })
}

pub fn parse_config(text: &str) -> Result<RestParams> {
    let config = ini::Ini::load_from_str(text)
        .map_err(|err| Error::Parse(err.to_string()))?;

    let mut params = RestParams::default();

    if let Some(settings) = config.section(Some(SECTION)) {
        if let Some(value) = load_setting(settings, "rotation")? {
            params.rotation = value;
        }

        if let Some(value) = load_setting(settings, "scale")? {
            params.scale = value;
        }
    }

    Ok(params)
}

fn load_setting(
    settings: &ini::Properties,
    setting: &str,
) -> Result<Option<f64>> {
    match settings.get(setting) {
        Some(value) => value.trim().parse::<f64>()
            .map(Some)
            .map_err(|_| Error::InvalidValue {
                section: SECTION.to_string(),
                key: setting.to_string(),
                value: value.to_string(),
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use config::*;
    use matrix;
    use std;

    #[test]
    fn parse_full() {
        let params = parse_config("[rest]\nrotation = 0.5\nscale = 3.0\n");
        assert_eq!(params, Ok(RestParams::new(0.5, 3.0)));
    }

    #[test]
    fn parse_partial() {
        let params = parse_config("[rest]\nscale = -1\n").unwrap();

        assert_eq!(params.rotation, matrix::REST_ROTATION);
        assert_eq!(params.scale, -1.0);
    }

    #[test]
    fn parse_missing_section() {
        let params = parse_config("[other]\nrotation = 9\n");
        assert_eq!(params, Ok(RestParams::default()));
    }

    #[test]
    fn parse_invalid_value() {
        let err = parse_config("[rest]\nrotation = fast\n").unwrap_err();

        assert_eq!(err, Error::InvalidValue {
            section: "rest".to_string(),
            key: "rotation".to_string(),
            value: "fast".to_string(),
        });

        assert!(err.to_string().contains("rotation"));
    }

    #[test]
    fn parse_malformed() {
        match parse_config("[rest") {
            Err(Error::Parse(_)) => (),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn load_missing_file() {
        match load_config("/nonexistent/rest.ini") {
            Err(Error::Io(msg)) => assert!(msg.contains("/nonexistent/rest.ini")),
            other => panic!("Expected io error, got {:?}", other),
        }
    }

    #[test]
    fn load_file() {
        let path = temp_config("load", "[rest]\nrotation = 0.25\n");
        let params = load_config(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(params, Ok(RestParams::new(0.25, matrix::REST_SCALE)));
    }

    fn temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "rest_matrix_{}_{}.ini",
            name,
            std::process::id(),
        ));

        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn fallback_missing_file() {
        let params = load_or_default("/nonexistent/rest.ini");
        assert_eq!(params, RestParams::default());
    }

    #[test]
    fn fallback_invalid_value() {
        let path = temp_config("invalid", "[rest]\nrotation = fast\nscale = 5\n");
        let params = load_or_default(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(params, RestParams::default());
    }

    #[test]
    fn fallback_keeps_valid_file() {
        let path = temp_config("valid", "[rest]\nscale = 5\n");
        let params = load_or_default(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(params, RestParams::new(matrix::REST_ROTATION, 5.0));
    }

    #[test]
    fn path_override() {
        let custom = "/etc/rest_matrix/custom.ini";

        std::env::set_var(CONFIG_PATH_VAR, custom);
        let overridden = config_path();
        std::env::remove_var(CONFIG_PATH_VAR);

        assert_eq!(overridden, custom);
        assert_eq!(config_path(), DEFAULT_CONFIG_PATH);
    }

    #[test]
    fn default_apply_matches_rest_matrix() {
        let vec = ::alg::Vec3::new(3., -1., 0.5);
        let params = RestParams::default();

        assert!(params.apply(vec) == matrix::rest_matrix(vec));
        assert!(params.apply(vec) == matrix::rest_matrix2(vec));
    }

    #[test]
    fn custom_apply() {
        // All-ones scale maps (1, 1, 1) to (3, 3, 3)
        let params = RestParams::new(1.0, 1.0);
        let result = params.apply(::alg::Vec3::one());

        assert!(result == ::alg::Vec3::new(-3., 3., 3.));
    }
}
