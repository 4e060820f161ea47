//! Dashboard view-model assembly.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Days, NaiveDate};

use docdash_core::clock::Clock;
use docdash_core::config::dashboard::{DashboardConfig, MAX_CHART_DAYS};
use docdash_core::error::AppError;
use docdash_core::result::AppResult;
use docdash_entity::format::format_time_ago;
use docdash_entity::{
    ChartData, DashboardStats, DashboardViewModel, RecentActivity, TypeStatistic,
};

use super::document::{ProcessedDocument, ProcessingStatus};
use super::icons::icon_for_extension;

/// Builds [`DashboardViewModel`]s from processed documents.
#[derive(Debug, Clone)]
pub struct DashboardBuilder {
    /// Assembly settings.
    config: DashboardConfig,
    /// Time source for "time ago" strings and the chart window.
    clock: Arc<dyn Clock>,
}

impl DashboardBuilder {
    /// Creates a new dashboard builder.
    pub fn new(config: DashboardConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        if config.badge_palette.is_empty() {
            return Err(AppError::validation("Badge palette must not be empty"));
        }
        if config.chart_days == 0 || config.chart_days > MAX_CHART_DAYS {
            return Err(AppError::validation(format!(
                "Chart must cover between 1 and {MAX_CHART_DAYS} days, got {}",
                config.chart_days
            )));
        }
        Ok(Self { config, clock })
    }

    /// Assembles the full dashboard.
    pub fn build(&self, documents: &[ProcessedDocument], active_users: u64) -> DashboardViewModel {
        let type_statistics = self.type_statistics(documents);
        let recent_activities = self.recent_activities(documents, &type_statistics);

        let vm = DashboardViewModel {
            stats: self.stats(documents, active_users),
            recent_activities,
            chart_data: self.chart_data(documents),
            type_statistics,
        };

        tracing::debug!(
            documents = documents.len(),
            types = vm.type_statistics.len(),
            recent = vm.recent_activities.len(),
            "Dashboard assembled"
        );

        vm
    }

    /// Header counters.
    pub fn stats(&self, documents: &[ProcessedDocument], active_users: u64) -> DashboardStats {
        let mut completed = 0u64;
        let mut finished = 0u64;

        for doc in documents.iter().filter(|d| d.status.is_finished()) {
            finished += 1;
            if doc.status == ProcessingStatus::Completed {
                completed += 1;
            }
        }
        let processing = documents.len() as u64 - finished;

        let success_rate = if finished == 0 {
            0.0
        } else {
            round_one_decimal(completed as f64 / finished as f64 * 100.0)
        };

        DashboardStats {
            total_documents: documents.len() as u64,
            success_rate,
            active_users,
            processing_count: processing,
        }
    }

    /// Counts per classification, largest first.
    pub fn type_statistics(&self, documents: &[ProcessedDocument]) -> Vec<TypeStatistic> {
        let unclassified = self.config.unclassified_label.as_str();

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for doc in documents {
            *counts.entry(doc.classification_or(unclassified)).or_default() += 1;
        }

        let mut ranked: Vec<(&str, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let total = documents.len() as f64;
        ranked
            .into_iter()
            .enumerate()
            .map(|(rank, (label, count))| TypeStatistic {
                type_name: label.to_string(),
                count,
                percentage: round_one_decimal(count as f64 / total * 100.0),
                progress_class: self.palette_class(rank).to_string(),
            })
            .collect()
    }

    /// Newest documents, decorated for the activity feed.
    ///
    /// Badge colours follow each classification's rank in `type_statistics`
    /// so the feed and the breakdown use the same colour per label.
    pub fn recent_activities(
        &self,
        documents: &[ProcessedDocument],
        type_statistics: &[TypeStatistic],
    ) -> Vec<RecentActivity> {
        let now = self.clock.now();
        let unclassified = self.config.unclassified_label.as_str();

        let mut newest: Vec<&ProcessedDocument> = documents.iter().collect();
        newest.sort_by(|a, b| {
            b.processed_at
                .cmp(&a.processed_at)
                .then_with(|| a.file_name.cmp(&b.file_name))
        });
        newest.truncate(self.config.recent_activity_limit);

        newest
            .into_iter()
            .map(|doc| {
                let classification = doc.classification_or(unclassified);
                let rank = type_statistics
                    .iter()
                    .position(|t| t.type_name == classification)
                    .unwrap_or(0);
                let extension = doc.extension();

                RecentActivity {
                    file_name: doc.file_name.clone(),
                    classification: classification.to_string(),
                    processed_at: doc.processed_at,
                    icon_class: icon_for_extension(&extension).to_string(),
                    file_extension: extension,
                    time_ago: format_time_ago(now - doc.processed_at),
                    badge_class: self.palette_class(rank).to_string(),
                }
            })
            .collect()
    }

    /// Documents per day over the configured window, oldest day first.
    pub fn chart_data(&self, documents: &[ProcessedDocument]) -> ChartData {
        let today = self.clock.now().date_naive();
        let span = u64::from(self.config.chart_days.saturating_sub(1));
        let first = today
            .checked_sub_days(Days::new(span))
            .unwrap_or(NaiveDate::MIN);

        let mut per_day: HashMap<NaiveDate, u64> = HashMap::new();
        for doc in documents {
            let day = doc.processed_at.date_naive();
            if day >= first && day <= today {
                *per_day.entry(day).or_default() += 1;
            }
        }

        let mut chart = ChartData::default();
        for day in first.iter_days().take_while(|day| *day <= today) {
            let count = per_day.get(&day).copied().unwrap_or(0);
            chart.push(day.format("%d/%m").to_string(), count as f64);
        }
        chart
    }

    fn palette_class(&self, rank: usize) -> &str {
        &self.config.badge_palette[rank % self.config.badge_palette.len()]
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
