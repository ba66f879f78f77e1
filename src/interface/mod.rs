pub mod prompts;
pub mod render;

pub use prompts::{collect_profile, prompt_dislikes, prompt_restrictions, prompt_yes_no};
pub use render::{display_food_list, display_plan};
