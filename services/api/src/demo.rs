use crate::infra::{InMemoryNoticePublisher, InMemoryProfileRepository};
use clap::Args;
use faculty_promotion::error::AppError;
use faculty_promotion::workflows::promotion::{
    AcademicRank, AccountId, EligibilityAssessment, FacultyProfile, ProfileEdit,
    PromotionService, PromotionStatus, ScholarlyRecord, UnmetCriterion,
};
use faculty_promotion::workflows::roster::RosterImporter;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RosterReportArgs {
    /// Roster CSV export (Account, Name, Department, Rank, Years, Publications, Conferences, Books, PhD)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Also run the promotion transition for every row and show the resulting rank
    #[arg(long)]
    pub(crate) promote: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional roster CSV to load before the walk-through
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Skip the administrative override step
    #[arg(long)]
    pub(crate) skip_override: bool,
}

/// One scored roster row, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RosterReportLine {
    pub(crate) account: String,
    pub(crate) name: String,
    pub(crate) rank: String,
    pub(crate) api_score: u64,
    pub(crate) eligible: bool,
    pub(crate) unmet: Vec<String>,
    pub(crate) promoted_to: Option<String>,
}

pub(crate) fn run_roster_report(args: RosterReportArgs) -> Result<(), AppError> {
    let RosterReportArgs { csv, promote } = args;
    let profiles = RosterImporter::from_path(&csv)?;
    let lines = build_roster_report(profiles, promote);

    println!("Faculty roster report ({})", csv.display());
    render_roster_report(&lines);
    Ok(())
}

pub(crate) fn build_roster_report(
    profiles: Vec<FacultyProfile>,
    promote: bool,
) -> Vec<RosterReportLine> {
    profiles
        .into_iter()
        .map(|mut profile| {
            let rank = profile.current_rank.label().to_string();
            let (assessment, promoted_to) = if promote {
                let attempt = profile.promote();
                let promoted_to = attempt
                    .outcome
                    .rank_changed()
                    .then(|| attempt.outcome.current_rank.label().to_string());
                (attempt.assessment, promoted_to)
            } else {
                (profile.assess_eligibility(), None)
            };

            RosterReportLine {
                account: profile.account_id.0.clone(),
                name: profile.name.clone(),
                rank,
                api_score: assessment.api_score,
                eligible: assessment.eligible,
                unmet: unmet_summaries(&assessment),
                promoted_to,
            }
        })
        .collect()
}

fn unmet_summaries(assessment: &EligibilityAssessment) -> Vec<String> {
    assessment
        .unmet
        .iter()
        .map(UnmetCriterion::summary)
        .collect()
}

fn render_roster_report(lines: &[RosterReportLine]) {
    if lines.is_empty() {
        println!("  (no faculty rows found)");
        return;
    }

    for line in lines {
        let verdict = if line.eligible {
            "eligible".to_string()
        } else {
            format!("not eligible: {}", line.unmet.join("; "))
        };
        println!(
            "- {} [{}] {} | API score {} | {}",
            line.name, line.account, line.rank, line.api_score, verdict
        );
        if let Some(next) = &line.promoted_to {
            println!("    promoted to {}", next);
        }
    }

    let eligible = lines.iter().filter(|line| line.eligible).count();
    println!(
        "{} of {} faculty currently eligible for promotion",
        eligible,
        lines.len()
    );
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { csv, skip_override } = args;

    let repository = Arc::new(InMemoryProfileRepository::default());
    let notices = Arc::new(InMemoryNoticePublisher::default());
    let service = PromotionService::new(repository.clone(), notices.clone());

    println!("Faculty promotion demo");
    if let Some(path) = csv {
        let seeded = repository.seed(RosterImporter::from_path(&path)?);
        println!("- Loaded {} roster profiles from {}", seeded, path.display());
    }

    let account = AccountId("demo-faculty".to_string());
    let profile = service.register(account.clone(), "demo-faculty")?;
    println!(
        "- Registered {} as {} ({})",
        profile.account_id, profile.current_rank, profile.promotion_status
    );

    let (_, attempt) = service.promote(&account)?;
    println!(
        "- Promotion attempt with an empty profile -> {} ({})",
        attempt.outcome.promotion_status,
        unmet_summaries(&attempt.assessment).join("; ")
    );

    let profile = service.update_profile(
        &account,
        ProfileEdit {
            name: "Demo Faculty".to_string(),
            department: Some("Computer Science".to_string()),
            current_rank: AcademicRank::AssistantProfessor,
            record: ScholarlyRecord {
                years_of_experience: 4,
                publications: 3,
                conferences_attended: 2,
                books_published: 0,
                phd_completed: true,
            },
        },
    )?;
    println!("- Profile updated, API score {}", profile.api_score);

    let (profile, attempt) = service.promote(&account)?;
    println!(
        "- Promotion attempt -> {} ({} -> {})",
        attempt.outcome.promotion_status, attempt.outcome.previous_rank, profile.current_rank
    );

    if !skip_override {
        let (profile, outcome) =
            service.set_promotion_status(&account, PromotionStatus::Promoted)?;
        println!(
            "- Administrator set status {} ({} -> {})",
            outcome.promotion_status, outcome.previous_rank, profile.current_rank
        );
    }

    println!("\nAdministrative dashboard");
    for profile in service.list()? {
        let entry = profile.roster_entry();
        println!(
            "  - {} | {} | score {} | {}",
            entry.name, entry.current_rank, entry.api_score, entry.promotion_status
        );
    }

    println!("\nNotices");
    for notice in notices.events() {
        println!(
            "  - {} {} -> {}",
            notice.issued_at.format("%Y-%m-%d %H:%M:%S"),
            notice.template,
            notice.account_id
        );
    }

    Ok(())
}
