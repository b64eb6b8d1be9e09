// Survey analysis: the chart series the dashboard shows, rebuilt from the
// store on every call.

pub mod distribution;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::db::models::{LikertColumn, SurveyColumn};
use crate::db::SurveyStore;
use crate::topics::aggregate::{aggregate, ImpactSummary};
use crate::topics::classifier::TopicClassifier;

use distribution::{likert_distribution, value_counts, CategoryCount};

/// One Likert chart.
#[derive(Debug, Clone, Serialize)]
pub struct LikertChart {
    pub column: LikertColumn,
    pub title: String,
    pub counts: Vec<CategoryCount>,
}

/// Everything the dashboard renders, in one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub total_responses: i64,
    pub schedule: Vec<CategoryCount>,
    pub likert: Vec<LikertChart>,
    pub impacts: ImpactSummary,
}

/// Distribution of the `Escala6x1` answers.
pub async fn schedule_distribution(store: &dyn SurveyStore) -> Result<Vec<CategoryCount>> {
    let values = store.get_column_values(SurveyColumn::Escala6x1).await?;
    Ok(value_counts(values))
}

/// Ordered distribution of one impact question.
pub async fn likert_chart(store: &dyn SurveyStore, column: LikertColumn) -> Result<LikertChart> {
    let values = store.get_column_values(column.column()).await?;
    Ok(LikertChart {
        column,
        title: column.title().to_string(),
        counts: likert_distribution(values),
    })
}

/// Topic counts over the free-text `Impactos` answers.
pub async fn impact_summary(
    store: &dyn SurveyStore,
    classifier: &TopicClassifier,
) -> Result<ImpactSummary> {
    let answers = store.get_column_values(SurveyColumn::Impactos).await?;
    let summary = aggregate(classifier, answers);
    info!(
        responses = summary.responses_analyzed,
        matched = summary.responses_matched,
        topics = summary.topics.len(),
        "Aggregated impact topics"
    );
    Ok(summary)
}

/// Build the full dashboard snapshot.
pub async fn build_dashboard(
    store: &dyn SurveyStore,
    classifier: &TopicClassifier,
) -> Result<Dashboard> {
    let total_responses = store.count_responses().await?;
    let schedule = schedule_distribution(store).await?;

    let mut likert = Vec::with_capacity(LikertColumn::ALL.len());
    for column in LikertColumn::ALL {
        likert.push(likert_chart(store, column).await?);
    }

    let impacts = impact_summary(store, classifier).await?;

    Ok(Dashboard {
        total_responses,
        schedule,
        likert,
        impacts,
    })
}
