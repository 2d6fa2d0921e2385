//! Prompt construction for the two generator calls.
//!
//! Pure string building, no I/O. The prompts spell out the expected JSON
//! response shape so backends that forward them to a language model get
//! parseable output back.

use pacer_store::models::{Priority, ProjectDraft};

/// Buffer-allocation instructions for the given priority, included in the
/// roadmap prompt.
pub fn buffer_strategy(priority: Priority) -> &'static str {
    match priority {
        Priority::OnTime => {
            "Plan tasks within 90% of available time. Reserve 10% for 'review' \
             tasks. Each day must include a daily 'check' task."
        }
        Priority::InTime => {
            "Plan tasks within 98% of available time. Reserve 2% for 'review' \
             tasks. Each day must include a daily 'check' task."
        }
        Priority::JustDone => {
            "Spread out planning. Actual tasks can extend the deadline by 20% \
             if needed. Focus on a relaxed pace."
        }
    }
}

/// Build the feasibility-check prompt for a draft.
pub fn feasibility_prompt(draft: &ProjectDraft) -> String {
    let mut prompt = String::with_capacity(1024);

    prompt.push_str(
        "As a project management expert, evaluate if this goal is realistic:\n",
    );
    prompt.push_str(&format!("Goal: {}\n", draft.goal));
    prompt.push_str(&format!("Target: {}\n", draft.name));
    prompt.push_str(&format!(
        "Available Daily Time: {} hours\n",
        draft.daily_work_time
    ));
    prompt.push_str(&format!(
        "Duration: {} to {}\n",
        draft.start_date, draft.end_date
    ));
    prompt.push_str(&format!("Background context: {}\n\n", draft.background));

    prompt.push_str(
        "If the project seems overly ambitious or impossible given the \
         constraints, provide 3 distinct adjustment options:\n\
         1. Adjust Daily Work Hours (increase).\n\
         2. Adjust End Date (extend).\n\
         3. Adjust Goal (simplify).\n\n",
    );
    prompt.push_str(
        "Respond with a single JSON object: {\"isFeasible\": bool, \
         \"reasoning\": string, \"options\": [{\"type\": \"hours\"|\"deadline\"|\"goal\", \
         \"description\": string, \"suggestedValue\": string}]}. \
         Return JSON only, no surrounding text.\n",
    );

    prompt
}

/// Build the roadmap-generation prompt for a draft.
pub fn roadmap_prompt(draft: &ProjectDraft) -> String {
    let mut prompt = String::with_capacity(1024);

    prompt.push_str("You are a project management expert. Generate a daily task roadmap.\n");
    prompt.push_str(&format!("Project: {}\n", draft.name));
    prompt.push_str(&format!("Goal: {}\n", draft.goal));
    prompt.push_str(&format!(
        "Duration: {} to {}\n",
        draft.start_date, draft.end_date
    ));
    prompt.push_str(&format!("Daily Hours: {}\n", draft.daily_work_time));
    prompt.push_str(&format!(
        "Priority Strategy: {} ({})\n",
        draft.priority,
        buffer_strategy(draft.priority)
    ));
    prompt.push_str(&format!("Context: {}\n\n", draft.background));

    prompt.push_str(
        "Break the work down into a JSON array of daily entries with specific, \
         actionable tasks: [{\"date\": \"YYYY-MM-DD\", \"tasks\": [{\"content\": string, \
         \"type\": \"normal\"|\"review\"|\"check\", \"isBuffer\": bool}]}]. \
         Each date must appear at most once. Return JSON only, no surrounding text.\n",
    );

    prompt
}
