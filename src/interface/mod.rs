pub mod prompts;
pub mod render;

pub use prompts::{
    match_packet, prompt_container_type, prompt_daily_calories, prompt_duration_days,
    prompt_idea_form, prompt_order_form, prompt_pack_mode, prompt_packet, prompt_people_count,
    prompt_pool, prompt_proportion, prompt_select, prompt_yes_no,
};
pub use render::{
    display_catalog, display_containers, display_summary, format_duration,
    format_duration_precise,
};
