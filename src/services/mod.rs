/// Business logic services layer
use crate::clients::ScheduleClient;
use crate::domain::{ChannelSchedule, ProgramEntry};
use crate::errors::ApiResult;
use crate::store::SnapshotStore;
use crate::utils::{s_pick, window_dates};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, warn};

/// EPG collection service: pages through the upstream schedule API, flattens
/// the per-channel listings and replaces the stored snapshot.
pub struct EpgService {
    client: ScheduleClient,
    store: Arc<SnapshotStore>,
    window_days: u32,
}

impl EpgService {
    pub fn new(client: ScheduleClient, store: Arc<SnapshotStore>, window_days: u32) -> Self {
        Self {
            client,
            store,
            window_days,
        }
    }

    /// Collect all channel schedules for one date (DD-MM-YYYY).
    ///
    /// Any upstream error abandons the date: partial pages are discarded and
    /// the date contributes nothing. The error is logged, never propagated.
    pub async fn collect_date(&self, date: &str) -> Vec<ChannelSchedule> {
        match self.collect_date_pages(date).await {
            Ok(schedules) => {
                info!(
                    "Done fetching EPG for {date} ({} channels processed)",
                    schedules.len()
                );
                schedules
            }
            Err(e) => {
                warn!("Error fetching EPG for {date}: {e}");
                Vec::new()
            }
        }
    }

    async fn collect_date_pages(&self, date: &str) -> ApiResult<Vec<ChannelSchedule>> {
        let mut schedules = Vec::new();
        let mut page = 0u64;

        loop {
            let offset = page * self.client.page_limit();
            let Some(response) = self.client.fetch_page(date, offset).await? else {
                // Empty data envelope stops the whole date, dropping anything
                // already accumulated.
                info!("No data found for {date}");
                return Ok(Vec::new());
            };

            for channel in &response.channels {
                if let Some(schedule) = channel_schedule(date, channel) {
                    schedules.push(schedule);
                }
            }

            if response.is_last() {
                break;
            }
            page += 1;
        }

        Ok(schedules)
    }

    /// Collect today (UTC) through `window_days - 1` days ahead, sequentially,
    /// concatenated in date order. A failed date contributes nothing.
    pub async fn aggregate_window(&self) -> Vec<ChannelSchedule> {
        let mut snapshot = Vec::new();
        for date in window_dates(Utc::now().date_naive(), self.window_days) {
            info!("Fetching EPG data for {date}...");
            snapshot.extend(self.collect_date(&date).await);
        }
        snapshot
    }

    /// Run one full refresh cycle and persist the result.
    ///
    /// An empty aggregate skips the write so a transient total upstream outage
    /// never wipes out the last good snapshot. Returns the number of channel
    /// schedules written (0 when skipped).
    pub async fn refresh(&self) -> ApiResult<usize> {
        let snapshot = self.aggregate_window().await;
        if snapshot.is_empty() {
            warn!("No EPG data fetched; keeping previous snapshot");
            return Ok(0);
        }
        self.store.write(&snapshot).await?;
        info!(
            "EPG data saved to {} ({} channel schedules)",
            self.store.path().display(),
            snapshot.len()
        );
        Ok(snapshot.len())
    }
}

/// Map one upstream channel object to a `ChannelSchedule`.
///
/// Presence checks only: channels missing an id or title, and programs missing
/// id or times, are skipped. Channels whose mapped program list comes out
/// empty are dropped.
fn channel_schedule(date: &str, channel: &Value) -> Option<ChannelSchedule> {
    let channel_id = s_pick(channel, &["id"])?;
    let channel_title = s_pick(channel, &["title"])?;

    let epg: Vec<ProgramEntry> = channel
        .get("epg")
        .and_then(Value::as_array)
        .map(|programs| programs.iter().filter_map(program_entry).collect())
        .unwrap_or_default();

    if epg.is_empty() {
        return None;
    }

    Some(ChannelSchedule {
        date: date.to_string(),
        channel_id,
        channel_title,
        epg,
    })
}

fn program_entry(program: &Value) -> Option<ProgramEntry> {
    Some(ProgramEntry {
        id: s_pick(program, &["id"])?,
        start_time: s_pick(program, &["startTime"])?,
        end_time: s_pick(program, &["endTime"])?,
        title: s_pick(program, &["title"])?,
        desc: s_pick(program, &["desc"]).unwrap_or_default(),
    })
}

/// Background refresh loop: refresh immediately, then every `interval` until
/// the stop signal fires. Cycles never overlap.
pub async fn run_refresh_loop(
    service: Arc<EpgService>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    info!(
        "Starting EPG refresh loop (interval: {}s)",
        interval.as_secs()
    );
    loop {
        match service.refresh().await {
            Ok(0) => {}
            Ok(written) => info!("EPG refresh complete ({written} channel schedules)"),
            Err(e) => error!("EPG refresh error: {e}"),
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = shutdown.changed() => {
                info!("EPG refresh loop stopping");
                break;
            }
        }
    }
}
