use crate::{
    domain::category::CategoryProps,
    validation::{ErrorTree, Validator},
};

/// Maximum length of a category name, in characters.
pub const NAME_MAX_LENGTH: usize = 255;

/// Validates category properties.
///
/// The name is trimmed, must not be empty and must be at most
/// [`NAME_MAX_LENGTH`] characters. A blank description is stored as no
/// description.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryValidator;

impl Validator for CategoryValidator {
    type Input = CategoryProps;
    type Output = CategoryProps;

    fn validate(&self, input: CategoryProps) -> Result<CategoryProps, ErrorTree> {
        let mut errors = ErrorTree::new();

        let name = input.name.trim().to_string();
        if name.is_empty() {
            errors.add("name", "name should not be empty");
        }
        if name.chars().count() > NAME_MAX_LENGTH {
            errors.add(
                "name",
                format!("name must be shorter than or equal to {NAME_MAX_LENGTH} characters"),
            );
        }

        let description = input.description.filter(|text| !text.trim().is_empty());

        errors.into_result(CategoryProps {
            name,
            description,
            ..input
        })
    }
}
