//! Context construction parameters.

use std::ffi::CString;

use z3wrap_sys::*;

use crate::error::Z3Result;

/// Parameters applied when a [`Context`](crate::Context) is created.
///
/// ```no_run
/// use z3wrap::{Config, Context};
///
/// let mut config = Config::new();
/// config.set("model", "true").unwrap();
/// let ctx = Context::new(&config);
/// ```
#[derive(Debug)]
pub struct Config {
    raw: Z3_config,
}

impl Config {
    pub fn new() -> Self {
        Self {
            raw: unsafe { Z3_mk_config() },
        }
    }

    /// Set a global parameter such as `"timeout"` or `"model"`.
    pub fn set(&mut self, param: &str, value: &str) -> Z3Result<&mut Self> {
        let param = CString::new(param)?;
        let value = CString::new(value)?;
        unsafe { Z3_set_param_value(self.raw, param.as_ptr(), value.as_ptr()) };
        Ok(self)
    }

    pub(crate) fn raw(&self) -> Z3_config {
        self.raw
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Config {
    fn drop(&mut self) {
        unsafe { Z3_del_config(self.raw) };
    }
}
