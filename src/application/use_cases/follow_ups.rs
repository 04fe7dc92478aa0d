use crate::application::dto::{FollowUp, MutationReport};
use crate::catalog::domain::{CatalogId, CompositeEntry};
use crate::ports::outbound::{CatalogClient, ProgressReporter};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use anyhow::Context;

/// Builds the follow-up plan: aliases first, then composite links, each in
/// input order.
pub(crate) fn plan(aliases: Vec<String>, links: Vec<CompositeEntry>) -> Vec<FollowUp> {
    aliases
        .into_iter()
        .map(FollowUp::Alias)
        .chain(links.into_iter().map(|entry| FollowUp::CompositeLink {
            child: CatalogId::new(entry.child_id()),
            path: entry.path().to_string(),
        }))
        .collect()
}

async fn apply_one<C: CatalogClient + ?Sized>(
    client: &C,
    parent: &CatalogId,
    follow_up: &FollowUp,
) -> std::result::Result<(), CatalogError> {
    match follow_up {
        FollowUp::Alias(alias) => client
            .create_alias(parent, alias)
            .await
            .map_err(|e| CatalogError::remote("createAlias", follow_up.to_string(), e)),
        FollowUp::CompositeLink { child, path } => {
            let linked = client
                .link_composite(parent, child, path)
                .await
                .map_err(|e| CatalogError::remote("partHasPart", follow_up.to_string(), e))?;
            if linked {
                Ok(())
            } else {
                Err(CatalogError::remote(
                    "partHasPart",
                    follow_up.to_string(),
                    anyhow::anyhow!("server did not record the link"),
                ))
            }
        }
    }
}

/// Issues the follow-up calls one at a time and records each applied one
/// in `report`.
///
/// Stops at the first failure. The returned error keeps the typed
/// `RemoteCallFailed` as its source and states what was already applied;
/// nothing is rolled back.
pub(crate) async fn apply<C, PR>(
    client: &C,
    progress_reporter: &PR,
    report: &mut MutationReport,
    follow_ups: Vec<FollowUp>,
    verb: &str,
) -> Result<()>
where
    C: CatalogClient + ?Sized,
    PR: ProgressReporter,
{
    if follow_ups.is_empty() {
        return Ok(());
    }

    let parent = report.catalog_id();
    let total = follow_ups.len();
    for (index, follow_up) in follow_ups.into_iter().enumerate() {
        tracing::debug!(catalog_id = %parent, "applying {}", follow_up);
        progress_reporter.report_progress(index, total, Some(&follow_up.to_string()));

        if let Err(e) = apply_one(client, &parent, &follow_up).await {
            progress_reporter.report_error(&format!("❌ Failed to apply {}", follow_up));
            let applied = report.applied.len();
            return Err(e).with_context(|| {
                format!(
                    "Part {} was {}, but only {} of {} follow-up call(s) applied; nothing was rolled back",
                    parent, verb, applied, total
                )
            });
        }
        report.applied.push(follow_up);
    }
    progress_reporter.report_progress(total, total, None);
    Ok(())
}
