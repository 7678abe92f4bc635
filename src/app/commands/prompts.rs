//! Prompt library commands.

use crate::domain::{AppError, PersistedPrompt, PromptPage};
use crate::ports::PromptApi;

/// `GET /prompts/?page=N` and print a summary table.
pub fn list(client: &impl PromptApi, page: u32) -> Result<PromptPage, AppError> {
    let prompts = client.list(page)?;

    if prompts.results.is_empty() {
        println!("No prompts on page {page}.");
        return Ok(prompts);
    }

    for prompt in &prompts.results {
        println!(
            "#{:<5} {:<18} {:<10} {}",
            prompt.id,
            prompt.category.label(),
            prompt.created_at.format("%Y-%m-%d"),
            prompt.title
        );
    }
    println!();
    println!("{} prompts total", prompts.count);
    if prompts.next.is_some() {
        println!("More on page {}", page + 1);
    }
    Ok(prompts)
}

/// `GET /prompts/{id}/` and print the full record.
pub fn show(client: &impl PromptApi, id: u64) -> Result<PersistedPrompt, AppError> {
    let prompt = client.fetch(id)?;

    println!("#{} {}", prompt.id, prompt.title);
    println!("Category: {}", prompt.category.label());
    println!("Style:    {}", prompt.response_style.label());
    println!("Created:  {}", prompt.created_at.format("%Y-%m-%d %H:%M"));
    println!();
    println!("--- Input ---");
    println!("{}", prompt.input_text);
    if !prompt.description.is_empty() {
        println!();
        println!("--- Context ---");
        println!("{}", prompt.description);
    }
    if !prompt.generated_prompt.is_empty() {
        println!();
        println!("--- Generated prompt ---");
        println!("{}", prompt.generated_prompt);
    }
    if prompt.has_response() {
        println!();
        println!("--- AI response ---");
        println!("{}", prompt.ai_response);
    }
    Ok(prompt)
}

/// `DELETE /prompts/{id}/`.
pub fn delete(client: &impl PromptApi, id: u64) -> Result<(), AppError> {
    client.delete(id)?;
    println!("✅ Deleted prompt #{id}");
    Ok(())
}
