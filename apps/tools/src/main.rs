use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use section_core::{
    load_settings, CanvasSize, ContactForm, PageEvent, PortfolioPage, QueuedViewport, Settings,
};
use shared::{content::Portfolio, domain::SectionAnchor};
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the portfolio content as JSON.
    Content,
    /// Prints the effective settings (file plus environment) as TOML.
    Settings,
    /// Runs the page headless, scrolling one section into view per second.
    Simulate {
        #[arg(long, default_value_t = 20)]
        seconds: u64,
        /// Submit the contact form once the contact section is reached.
        #[arg(long)]
        submit: bool,
        /// Hero seed. Overrides the configured seed; 0 when neither is set.
        #[arg(long)]
        seed: Option<u64>,
    },
}

const TICK: Duration = Duration::from_millis(100);

/// Drives `page` on a tokio interval for `length`, returning every page event.
async fn simulate(page: &mut PortfolioPage, length: Duration, submit: bool) -> Vec<PageEvent> {
    let mut ticker = interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let started = Instant::now();
    let mut events = page.mount(Duration::ZERO);
    let mut scrolled_to = 0usize;
    let mut submitted = false;

    loop {
        ticker.tick().await;
        let elapsed = started.elapsed();
        if elapsed > length {
            break;
        }
        events.extend(page.advance_to(elapsed));

        let due = (elapsed.as_secs() as usize).min(SectionAnchor::ALL.len() - 1);
        while scrolled_to < due {
            scrolled_to += 1;
            let anchor = SectionAnchor::ALL[scrolled_to];
            events.extend(page.report_visibility(&anchor.element_id(), 1.0));
            if anchor == SectionAnchor::Experience {
                for element in experience_items(page) {
                    events.extend(page.report_visibility(&element, 1.0));
                }
            }
            if anchor == SectionAnchor::Contact && submit && !submitted {
                let form = ContactForm::new("Visitor", "visitor@example.com", "Hello there");
                events.extend(page.submit_contact(Some(form)).1);
                submitted = true;
            }
        }
    }

    page.unmount_all();
    events
}

fn experience_items(page: &PortfolioPage) -> Vec<shared::domain::ElementId> {
    let parent = SectionAnchor::Experience.element_id();
    page.section(SectionAnchor::Experience)
        .and_then(|section| section.reveal())
        .map(|tracker| {
            tracker
                .tracked()
                .filter(|element| **element != parent)
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

/// An explicit `--seed` wins over the configured one.
fn resolve_seed(flag: Option<u64>, settings: &Settings) -> u64 {
    flag.or(settings.hero_seed).unwrap_or(0)
}

fn build_page(settings: &Settings, seed: u64) -> Result<PortfolioPage> {
    let page = PortfolioPage::new(
        settings,
        &Portfolio::default(),
        QueuedViewport::new(),
        seed,
        CanvasSize::default(),
    )?;
    Ok(page)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Content => {
            let json = serde_json::to_string_pretty(&Portfolio::default())
                .context("serializing portfolio content")?;
            println!("{json}");
        }
        Command::Settings => {
            let settings = load_settings(cli.config.as_deref())?;
            let text = toml::to_string_pretty(&settings).context("serializing settings")?;
            print!("{text}");
        }
        Command::Simulate {
            seconds,
            submit,
            seed,
        } => {
            let settings = load_settings(cli.config.as_deref())?;
            let mut page = build_page(&settings, resolve_seed(seed, &settings))?;
            let events = simulate(&mut page, Duration::from_secs(seconds), submit).await;
            for event in &events {
                info!(?event, "simulate: page event");
            }
            info!(events = events.len(), "simulate: finished");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use section_core::ControllerEvent;
    use shared::domain::SubmissionState;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn simulation_reveals_sections_and_completes_submission() {
        let mut page = build_page(&Settings::default(), 3).expect("page");
        let events = simulate(&mut page, Duration::from_secs(12), true).await;

        assert!(events.contains(&PageEvent::HeroIntroRevealed));
        for anchor in [
            SectionAnchor::Skills,
            SectionAnchor::Projects,
            SectionAnchor::Experience,
        ] {
            assert!(page.is_revealed(&anchor.element_id()), "{anchor} revealed");
        }

        let states: Vec<SubmissionState> = events
            .iter()
            .filter_map(|event| match event {
                PageEvent::Section {
                    event: ControllerEvent::Submission(state),
                    ..
                } => Some(*state),
                _ => None,
            })
            .collect();
        assert_eq!(
            states,
            vec![
                SubmissionState::Pending,
                SubmissionState::Succeeded,
                SubmissionState::Idle
            ]
        );
        assert_eq!(page.next_deadline(), None);
    }

    #[test]
    fn seed_flag_overrides_configured_seed() {
        let settings = Settings {
            hero_seed: Some(42),
            ..Settings::default()
        };
        assert_eq!(resolve_seed(Some(7), &settings), 7);
        assert_eq!(resolve_seed(None, &settings), 42);
        assert_eq!(resolve_seed(None, &Settings::default()), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn short_simulation_never_reaches_contact() {
        let mut page = build_page(&Settings::default(), 3).expect("page");
        let events = simulate(&mut page, Duration::from_millis(1500), true).await;

        assert!(page.is_revealed(&SectionAnchor::Skills.element_id()));
        assert!(!page.is_revealed(&SectionAnchor::Projects.element_id()));
        assert!(!events.iter().any(|event| matches!(
            event,
            PageEvent::Section {
                anchor: SectionAnchor::Contact,
                ..
            }
        )));
    }
}
