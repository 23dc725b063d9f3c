use crate::error::{StatError, StatResult};
use crate::models::uptime::UptimeInfo;
use crate::utils::file;
use log::{debug, error};
use std::path::Path;
use std::time::Instant;

pub async fn read_uptime(path: &Path) -> StatResult<UptimeInfo> {
    let start = Instant::now();
    let result = file::read_to_string(path)
        .await
        .and_then(|contents| parse_uptime(&contents));
    if let Err(e) = &result {
        error!("Uptime: error: {}", e);
    }
    debug!("read_uptime took: {} ms", start.elapsed().as_millis());
    result
}

pub fn parse_uptime(contents: &str) -> StatResult<UptimeInfo> {
    let mut tokens = contents.split_whitespace();
    let mut next_seconds = |name: &str| -> StatResult<f64> {
        let token = tokens
            .next()
            .ok_or_else(|| StatError::ParseDegenerate(format!("Missing {} in uptime source", name)))?;
        token.parse::<f64>().map_err(|e| {
            StatError::ParseDegenerate(format!("Invalid {} {:?}: {}", name, token, e))
        })
    };

    let uptime_seconds = next_seconds("uptime")?;
    let idle_seconds = next_seconds("idle time")?;
    Ok(UptimeInfo {
        uptime_seconds,
        idle_seconds,
    })
}
