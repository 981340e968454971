pub mod stage1_extract;
pub mod stage2_sort;
pub mod stage3_render;
