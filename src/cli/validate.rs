use std::path::Path;
use std::str::FromStr;

use crate::core::io::hts::is_stdin;
use crate::core::stranding::Protocol;

pub fn path(rawpath: &str) -> Result<(), String> {
    let path = Path::new(&rawpath);
    // FIFOs and devices, e.g. process substitution
    if is_stdin(path) || (path.exists() && !path.is_dir()) {
        Ok(())
    } else {
        Err(format!("{} file doesn't exist or there is no permission to read it", rawpath))
    }
}

pub fn writable(rawpath: &str) -> Result<(), String> {
    let path = Path::new(&rawpath);
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() || parent.is_dir() => Ok(()),
        None => Ok(()),
        Some(_) => Err(format!("Path {} seems to be not writable", rawpath)),
    }
}

pub fn stranding(stranding: &str) -> Result<(), String> {
    Protocol::from_str(stranding).map(|_| ())
}

pub fn numeric<T>(low: T, upper: T) -> impl Fn(&str) -> Result<(), String>
where
    T: FromStr + std::fmt::Display + std::cmp::PartialOrd + Sized,
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    move |val: &str| -> Result<(), String> {
        let integer = val.parse::<T>().map_err(|_| format!("failed to parse {}", val))?;
        if integer < low || integer > upper {
            return Err(format!("Value {} is expected to be inside [{}, {}] range", val, low, upper));
        }
        Ok(())
    }
}
