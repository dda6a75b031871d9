use std::path::PathBuf;

/// Dashboard configuration. Every field has a fixed default; the process
/// reads no flags or environment variables.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16,
    /// Launch table, relative to the working directory.
    pub data_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
            data_path: PathBuf::from("spacex_launch_dash.csv"),
        }
    }
}

impl DashboardConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_served_address() {
        let c = DashboardConfig::default();
        assert_eq!(c.addr(), "0.0.0.0:8050");
        assert_eq!(c.data_path, PathBuf::from("spacex_launch_dash.csv"));
    }
}
