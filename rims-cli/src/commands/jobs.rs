//! Job catalog command handlers
//!
//! Handles listing, searching and inspecting job postings, and the
//! filter-option summary the listing page builds from the catalog.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use rims_core::domain::{FilterOptions, JobId, JobPost};
use rims_core::dto::job::JobFilter;

use crate::config::Config;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// List the full job catalog
    List,
    /// Search jobs with filters and paging
    Search {
        /// Free-text search over title and position
        #[arg(long)]
        search: Option<String>,
        /// Exact location
        #[arg(long)]
        location: Option<String>,
        /// Years of experience required (0 = none)
        #[arg(long)]
        experience: Option<i32>,
        /// Job type id (see `jobs filters`)
        #[arg(long)]
        job_type: Option<i32>,
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Page size
        #[arg(long, default_value_t = 6)]
        page_size: u32,
    },
    /// Show one job posting
    Get {
        /// Job id
        id: String,
    },
    /// Show the distinct filter values available in the catalog
    Filters,
}

/// Handle job commands
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let store = config.session_store();
    let client = config.portal_client(&store);

    match command {
        JobCommands::List => {
            let jobs = client.list_jobs().await?;
            print_job_list(&jobs);
        }
        JobCommands::Search {
            search,
            location,
            experience,
            job_type,
            page,
            page_size,
        } => {
            let filter = JobFilter {
                search,
                location,
                experience,
                job_type,
                page_number: page,
                page_size,
            };
            let jobs = client.filter_jobs(&filter).await?;
            print_job_list(&jobs);
            println!("{}", format!("Page {page}").dimmed());
        }
        JobCommands::Get { id } => {
            let job = client.get_job(&JobId::new(id)).await?;
            print_job_details(&job);
        }
        JobCommands::Filters => {
            let jobs = client.list_jobs().await?;
            print_filter_options(&FilterOptions::from_catalog(&jobs));
        }
    }

    Ok(())
}

fn print_job_list(jobs: &[JobPost]) {
    if jobs.is_empty() {
        println!("{}", "No jobs found.".yellow());
        return;
    }

    println!("{}", format!("Found {} job(s):", jobs.len()).bold());
    println!();
    for job in jobs {
        print_job_summary(job);
    }
}

/// Print a one-card job summary
fn print_job_summary(job: &JobPost) {
    println!("  {} {} {}", "▸".cyan(), job.title.bold(), format!("[{}]", job.id).dimmed());
    println!("    Location:   {}", job.location.as_deref().unwrap_or("n/a"));
    println!("    Salary:     {}", salary_text(job));
    println!("    Experience: {}", experience_text(job.experience));
    if let Some(expire_at) = job.expire_at {
        println!(
            "    Apply by:   {}",
            expire_at.format("%Y-%m-%d").to_string().dimmed()
        );
    }
    println!();
}

/// Print detailed job information
fn print_job_details(job: &JobPost) {
    println!("{}", "Job Details:".bold());
    println!("  ID:         {}", job.id.to_string().cyan());
    println!("  Title:      {}", job.title);
    println!("  Location:   {}", job.location.as_deref().unwrap_or("n/a"));
    println!("  Salary:     {}", salary_text(job));
    println!("  Experience: {}", experience_text(job.experience));
    if let Some(name) = &job.job_type_name {
        println!("  Type:       {}", name);
    }
    if let Some(expire_at) = job.expire_at {
        println!("  Apply by:   {}", expire_at.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(description) = &job.description {
        println!("\n{}", "Description:".bold());
        println!("{description}");
    }
    if let Some(requirement) = &job.requirement {
        println!("\n{}", "Requirements:".bold());
        println!("{requirement}");
    }
    if let Some(benefit) = &job.benefit {
        println!("\n{}", "Benefits:".bold());
        println!("{benefit}");
    }
}

fn print_filter_options(options: &FilterOptions) {
    println!("{}", "Locations:".bold());
    for location in &options.locations {
        println!("  {location}");
    }

    println!("\n{}", "Experience levels:".bold());
    for experience in &options.experiences {
        println!("  {}", experience_text(Some(*experience)));
    }

    println!("\n{}", "Job types:".bold());
    for job_type in &options.job_types {
        println!("  {} {}", format!("[{}]", job_type.id).cyan(), job_type.name);
    }
}

fn salary_text(job: &JobPost) -> String {
    match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) => format!("{min} - {max} $"),
        _ => "Negotiable".to_string(),
    }
}

fn experience_text(experience: Option<i32>) -> String {
    match experience {
        Some(0) => "No experience required".to_string(),
        Some(years) => format!("{years} year(s)"),
        None => "n/a".to_string(),
    }
}
