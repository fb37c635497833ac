//! Terminal rendering for topics and scan findings

use crate::assets::{AssetResolver, AssetStatus};
use claritycare_core::Topic;
use claritycare_scanner::Warning;

/// The developer panel shows at most this many findings per topic
pub const MAX_DISPLAYED_WARNINGS: usize = 8;

/// Category whose topics carry clinician-visit question prompts
pub const COMPANION_CATEGORY: &str = "Post-Diagnosis Companion";

const BANNER: &str =
    "Education only. Not medical advice. This tool does not diagnose, assess urgency, or provide treatment instructions.";
const FOOTER: &str = "Education only — not diagnosis, not urgency guidance, not treatment instructions. If you're worried about a symptom, use professional care and bring questions to a clinician.";

/// Presentation toggles for a topic view
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Show the ELI5 summary section
    pub eli5: bool,
    /// Append extra-detail captions where authored
    pub extra_detail: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            eli5: true,
            extra_detail: false,
        }
    }
}

/// Lines of the developer warnings panel, capped at the display limit.
///
/// The scan itself is uncapped; only this panel truncates.
pub fn warning_panel(warnings: &[Warning]) -> Vec<String> {
    if warnings.is_empty() {
        return vec!["No safety/style warnings detected.".to_string()];
    }

    let mut lines = vec!["Safety/style warnings detected (dev only):".to_string()];
    for warning in warnings.iter().take(MAX_DISPLAYED_WARNINGS) {
        lines.push(format!("- {}", warning));
    }
    lines
}

/// Print the filtered topic list with a result count
pub fn render_topic_list(topics: &[&Topic]) {
    if topics.is_empty() {
        println!("No topics match your search. Try a shorter keyword.");
        return;
    }

    println!("{} topics", topics.len());
    println!();
    for topic in topics {
        println!(
            "* {} [{}] — {}",
            topic.title(),
            topic.category(),
            topic.one_minute_summary()
        );
    }
}

/// Print one topic's sections in reading order.
///
/// `warnings` is the result of a developer scan; `None` hides the panel
/// entirely, `Some` shows it (capped) before the content.
pub fn render_topic(
    topic: &Topic,
    assets: &AssetResolver,
    warnings: Option<&[Warning]>,
    options: RenderOptions,
) {
    println!("{}", BANNER);
    println!();
    println!("# {}", topic.title());
    println!("[{}] ~60 seconds", topic.category());
    println!();

    if let Some(warnings) = warnings {
        for line in warning_panel(warnings) {
            println!("{}", line);
        }
        println!();
    }

    println!("## One-Minute Summary");
    println!("{}", topic.one_minute_summary());
    extra_detail(topic, "oneMinuteSummary", options);
    println!();

    if options.eli5 {
        println!("## ELI5 Summary");
        println!("{}", topic.eli5_summary());
        println!();
    }

    println!("## What's happening in your body");
    for item in topic.whats_happening() {
        println!("- {}", item);
    }
    extra_detail(topic, "whatsHappening", options);
    println!();

    if let Some(analogy) = topic.analogy() {
        println!("## Analogy");
        println!("{}", analogy.title);
        println!("{}", analogy.story);
        extra_detail(topic, "analogy", options);
        println!();
    }

    println!("## People often notice");
    for item in topic.people_often_notice() {
        println!("- {}", item);
    }
    extra_detail(topic, "peopleOftenNotice", options);
    println!();

    println!("## General self-care education");
    println!("(Non-prescriptive, no meds, no urgency guidance.)");
    for item in topic.general_self_care() {
        println!("- {}", item);
    }
    extra_detail(topic, "generalSelfCare", options);
    println!();

    let questions = topic.questions_for_clinician();
    if topic.category() == COMPANION_CATEGORY && !questions.is_empty() {
        println!("## Questions for your clinician");
        for item in questions {
            println!("- {}", item);
        }
        extra_detail(topic, "questionsForClinician", options);
        println!();
    }

    println!("## Visual");
    match topic.visuals().first() {
        Some(visual) => match assets.resolve(visual.src) {
            AssetStatus::Found(path) => {
                println!("{} ({})", path.display(), visual.alt.unwrap_or(""));
            }
            AssetStatus::Missing(path) => {
                println!("(Visual missing) Add file: {}", path.display());
            }
        },
        None => println!("No visual added yet for this topic."),
    }
    println!();

    if let Some(video) = topic.videos().first() {
        println!("## Video (optional)");
        println!("Educational resource: {}", video.embed_url);
        println!();
    }

    println!("## Resources");
    let resources = topic.resources();
    if resources.is_empty() {
        println!("No resources yet.");
    } else {
        for resource in resources {
            println!("- {}: {}", resource.label, resource.url);
        }
    }
    println!();

    println!("Last reviewed: {}", topic.last_reviewed().unwrap_or("—"));
    println!();
    println!("{}", FOOTER);
}

fn extra_detail(topic: &Topic, field: &str, options: RenderOptions) {
    if !options.extra_detail {
        return;
    }
    if let Some(caption) = topic.extra_detail(field) {
        println!("  ({})", caption);
    }
}
