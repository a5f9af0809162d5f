use std::path::Path;

/// Settings the server needs, whichever source they were read from.
pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn seed_file(&self) -> Option<&Path>;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
