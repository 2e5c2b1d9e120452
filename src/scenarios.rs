//! Reference scenarios run by the `settle` binary.

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{catch_sync, wrap_async, wrap_sync, Outcome};

/// One named scenario and the record form of its outcome
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub outcome: Value,
}

fn report<T, E>(name: &'static str, outcome: Outcome<T, E>) -> Result<ScenarioReport>
where
    T: Serialize,
    E: Serialize,
{
    debug!("Scenario {} settled (success: {})", name, outcome.is_success());
    Ok(ScenarioReport {
        name,
        outcome: serde_json::to_value(&outcome)?,
    })
}

fn describe(error: anyhow::Error) -> String {
    format!("{:#}", error)
}

/// Run every scenario in order.
///
/// Must be polled inside a tokio runtime; the aborted-task scenario spawns
/// onto it. Outside one this returns an error instead of running anything.
pub async fn run_all() -> Result<Vec<ScenarioReport>> {
    let runtime = tokio::runtime::Handle::try_current()
        .context("Scenarios must run inside a tokio runtime")?;
    let mut reports = Vec::new();

    let returned = wrap_sync(|| anyhow::Ok(42)).map_err(describe);
    reports.push(report("sync_value", returned)?);

    let raised = wrap_sync(|| -> Result<i32> { bail!("RangeError: bad") }).map_err(describe);
    reports.push(report("sync_error", raised)?);

    let panicked = catch_sync(|| -> i32 { panic!("RangeError: bad") });
    reports.push(report("sync_panic", panicked)?);

    let resolved = wrap_async(async { anyhow::Ok("ok") }).await.map_err(describe);
    reports.push(report("async_value", resolved)?);

    let rejected = wrap_async(async { Err::<&str, _>(anyhow!("Error: net down")) })
        .await
        .map_err(describe);
    reports.push(report("async_error", rejected)?);

    let unit = wrap_sync(|| anyhow::Ok(())).map_err(describe);
    reports.push(report("unit_value", unit)?);

    let aborted = runtime.spawn(std::future::pending::<u8>());
    aborted.abort();
    let joined = wrap_async(aborted).await.map_err(|e| e.to_string());
    reports.push(report("aborted_task", joined)?);

    Ok(reports)
}
