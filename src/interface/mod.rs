pub mod progress;
pub mod prompts;
pub mod render;

pub use progress::{ViewOptions, show_processing};
pub use prompts::{
    collect_profile, prompt_age, prompt_conditions, prompt_diet, prompt_level, prompt_name,
    prompt_yes_no,
};
pub use render::{
    display_meals, display_outcome, render_banner, render_chart, render_meal_slots,
    render_outcome,
};
