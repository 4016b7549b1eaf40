/// `quiz_category.id` value that means "draw from every category"
pub const ALL_CATEGORIES_ID: i32 = 0;
