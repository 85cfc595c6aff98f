//! Derives the overall-to-underlying type name map from type-level rename
//! declarations. Types without a declaration are not materialized; absence
//! means identity.

use apollo_compiler::Name;
use apollo_compiler::collections::IndexMap;
use indexmap::map::Entry;

use crate::OverallSchema;
use crate::blueprint::UnderlyingType;
use crate::error::BlueprintError;

pub(crate) fn underlying_types(
    overall: &OverallSchema,
) -> Result<IndexMap<Name, UnderlyingType>, BlueprintError> {
    let mut underlying_types: IndexMap<Name, UnderlyingType> = IndexMap::default();
    for declaration in &overall.declarations.types {
        if !overall.schema.types.contains_key(&declaration.overall_name) {
            return Err(BlueprintError::InvalidDeclaration {
                element: declaration.overall_name.to_string(),
                message: "type does not exist in the overall schema".to_owned(),
            });
        }
        match underlying_types.entry(declaration.overall_name.clone()) {
            Entry::Occupied(_) => {
                return Err(BlueprintError::DuplicateTypeMapping {
                    overall_name: declaration.overall_name.clone(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(UnderlyingType {
                    overall_name: declaration.overall_name.clone(),
                    underlying_name: declaration.underlying_name.clone(),
                });
            }
        }
    }
    Ok(underlying_types)
}

#[cfg(test)]
mod tests {
    use apollo_compiler::Schema;
    use apollo_compiler::name;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::declarations::SchemaDeclarations;
    use crate::declarations::TypeMappingDeclaration;

    fn overall(declarations: Vec<TypeMappingDeclaration>) -> OverallSchema {
        OverallSchema {
            schema: Schema::parse_and_validate(
                r#"
                type Query { issue: Issue }
                type Issue { key: String }
                "#,
                "overall.graphql",
            )
            .expect("valid overall SDL"),
            declarations: SchemaDeclarations {
                types: declarations,
                ..Default::default()
            },
        }
    }

    fn declaration(overall_name: &str, underlying_name: &str) -> TypeMappingDeclaration {
        TypeMappingDeclaration {
            overall_name: Name::new(overall_name).expect("valid name"),
            underlying_name: Name::new(underlying_name).expect("valid name"),
        }
    }

    #[test]
    fn materializes_declared_renames_keyed_by_overall_name() {
        let overall = overall(vec![declaration("Issue", "JiraIssue")]);
        let types = underlying_types(&overall).expect("maps types");
        assert_eq!(
            types.get(&name!("Issue")),
            Some(&UnderlyingType {
                overall_name: name!("Issue"),
                underlying_name: name!("JiraIssue"),
            })
        );
        assert_eq!(types.len(), 1);
    }

    #[test]
    fn rejects_duplicate_overall_names() {
        let overall = overall(vec![
            declaration("Issue", "JiraIssue"),
            declaration("Issue", "Task"),
        ]);
        let error = underlying_types(&overall).expect_err("duplicate mapping");
        assert_eq!(
            error,
            BlueprintError::DuplicateTypeMapping {
                overall_name: name!("Issue"),
            }
        );
    }

    #[test]
    fn rejects_declarations_for_unknown_overall_types() {
        let overall = overall(vec![declaration("Sprint", "JiraSprint")]);
        let error = underlying_types(&overall).expect_err("unknown type");
        assert_eq!(
            error,
            BlueprintError::InvalidDeclaration {
                element: "Sprint".to_owned(),
                message: "type does not exist in the overall schema".to_owned(),
            }
        );
    }
}
