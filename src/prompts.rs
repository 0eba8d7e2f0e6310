use rand::Rng;

const WRITING_PROMPTS: &[&str] = &[
    "What made you smile today?",
    "Describe a moment when you felt proud of yourself.",
    "What are you most grateful for right now?",
    "If you could give advice to your past self, what would it be?",
    "What's something new you learned recently?",
    "Describe your ideal day from start to finish.",
    "What challenge are you currently working through?",
    "What does success mean to you?",
    "Who has had a positive impact on your life recently?",
    "What are you looking forward to?",
];

pub fn prompt_for(index: usize) -> &'static str {
    WRITING_PROMPTS[index % WRITING_PROMPTS.len()]
}

pub fn random_prompt() -> &'static str {
    let index = rand::thread_rng().gen_range(0..WRITING_PROMPTS.len());
    prompt_for(index)
}
