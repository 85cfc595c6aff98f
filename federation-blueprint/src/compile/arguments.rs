//! Builds the ordered argument list for a hydration call from the declaration's
//! bindings and the backend field's own argument definitions.

use apollo_compiler::Name;
use apollo_compiler::ast::FieldDefinition;

use crate::OverallSchema;
use crate::Service;
use crate::compile::field_at;
use crate::coordinates::FieldCoordinates;
use crate::declarations::ArgumentBindingValue;
use crate::declarations::HydrationDeclaration;
use crate::error::BlueprintError;
use crate::error::format_path;
use crate::hydration::HydrationArgument;
use crate::hydration::ValueSource;

/// Resolves one [`HydrationArgument`] per bound backend argument, in the order
/// the backend field declares its arguments. Unbound optional arguments are
/// omitted; unbound required arguments fail the build.
pub(crate) fn resolve(
    overall: &OverallSchema,
    location: &FieldCoordinates,
    service: &Service,
    source_field: &FieldDefinition,
    declaration: &HydrationDeclaration,
) -> Result<Vec<HydrationArgument>, BlueprintError> {
    // A binding must name an argument the backend field actually declares,
    // otherwise it could never be sent.
    for binding in &declaration.arguments {
        if !source_field
            .arguments
            .iter()
            .any(|argument| argument.name == binding.name)
        {
            return Err(BlueprintError::UnresolvableArgument {
                location: location.clone(),
                argument_name: binding.name.clone(),
                message: format!(
                    "the source field in service \"{}\" does not declare this argument",
                    service.name
                ),
            });
        }
    }

    let mut arguments = Vec::new();
    for argument in &source_field.arguments {
        let binding = declaration
            .arguments
            .iter()
            .find(|binding| binding.name == argument.name);
        match binding {
            Some(binding) => {
                let value_source = match &binding.value {
                    ArgumentBindingValue::Literal(value) => ValueSource::Literal(value.clone()),
                    ArgumentBindingValue::FromParent(path) => {
                        check_parent_path(overall, location, &argument.name, path)?;
                        ValueSource::ParentField(path.clone())
                    }
                };
                arguments.push(HydrationArgument {
                    name: argument.name.clone(),
                    value_source,
                });
            }
            None if argument.ty.is_non_null() && argument.default_value.is_none() => {
                return Err(BlueprintError::UnresolvableArgument {
                    location: location.clone(),
                    argument_name: argument.name.clone(),
                    message: "required argument has no binding in the hydration declaration"
                        .to_owned(),
                });
            }
            None => {}
        }
    }
    Ok(arguments)
}

/// A parent-value reference must point at fields that exist on the overall
/// type of the hydrated field's parent; the execution engine substitutes the
/// live result along this path at request time.
fn check_parent_path(
    overall: &OverallSchema,
    location: &FieldCoordinates,
    argument_name: &Name,
    path: &[Name],
) -> Result<(), BlueprintError> {
    if path.is_empty() {
        return Err(BlueprintError::UnresolvableArgument {
            location: location.clone(),
            argument_name: argument_name.clone(),
            message: "parent value reference has an empty path".to_owned(),
        });
    }
    if field_at(&overall.schema, &location.type_name, path).is_none() {
        return Err(BlueprintError::UnresolvableArgument {
            location: location.clone(),
            argument_name: argument_name.clone(),
            message: format!(
                "path \"{}\" does not exist on type \"{}\"",
                format_path(path),
                location.type_name
            ),
        });
    }
    Ok(())
}
