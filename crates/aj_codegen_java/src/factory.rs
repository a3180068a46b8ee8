use crate::builder::{JavaCompilationUnit, JavaSourceBuilder};
use crate::config::JavaCodeGenConfig;
use crate::error::CodeGenError;
use crate::imports::ImportManager;
use aj_model::{is_provider, known, Annotation, AssistedInjection, DependencyRequest};

/// Render the factory class for a validated injection.
///
/// The class carries one provider field per provided dependency, an
/// `@Inject` constructor storing them, and an override of the factory method
/// whose parameters follow the factory interface's declared order while the
/// `new` call's arguments follow the target constructor's declared order.
pub fn generate_factory(
    injection: &AssistedInjection,
    config: &JavaCodeGenConfig,
) -> Result<JavaCompilationUnit, CodeGenError> {
    let generated = injection.generated_type();
    let mut imports = ImportManager::new(&generated.package);
    let mut builder = JavaSourceBuilder::new(config.indent.clone());

    let provided: Vec<&DependencyRequest> = injection.provided_requests().collect();

    if let Some(generated_annotation) = &injection.generated_annotation {
        builder.push_line(&imports.render_annotation(generated_annotation));
    }
    builder.push_line(&format!(
        "public final class {} implements {} {{",
        generated.simple_name(),
        imports.reference(&injection.factory_type)
    ));
    builder.indent();

    // Qualifiers stay off the fields; they only matter on the constructor
    // parameters the container injects.
    for request in &provided {
        let field_type = imports.render_type(&AssistedInjection::provider_type(request))?;
        builder.push_line(&format!("private final {field_type} {};", request.name));
    }
    if !provided.is_empty() {
        builder.push_line("");
    }

    builder.push_line(&imports.render_annotation(&Annotation::marker(known::INJECT.clone())));
    let mut constructor_parameters = Vec::new();
    for request in &provided {
        let mut rendered = String::new();
        if let Some(qualifier) = request.key.qualifier() {
            rendered.push_str(&imports.render_annotation(qualifier));
            rendered.push(' ');
        }
        rendered.push_str(&imports.render_type(&AssistedInjection::provider_type(request))?);
        rendered.push(' ');
        rendered.push_str(&request.name);
        constructor_parameters.push(rendered);
    }
    builder.push_line(&format!(
        "public {}({}) {{",
        generated.simple_name(),
        constructor_parameters.join(", ")
    ));
    builder.indent();
    for request in &provided {
        builder.push_line(&format!("this.{0} = {0};", request.name));
    }
    builder.dedent();
    builder.push_line("}");
    builder.push_line("");

    builder.push_line(&imports.render_annotation(&Annotation::marker(known::OVERRIDE.clone())));
    // A parameterized target propagates its type variables onto the override.
    let type_variables = injection.target_type.type_variables();
    let generics = if type_variables.is_empty() {
        String::new()
    } else {
        format!("<{}> ", type_variables.join(", "))
    };
    let mut method_parameters = Vec::new();
    for named_key in &injection.assisted_keys {
        method_parameters.push(format!(
            "{} {}",
            imports.render_type(named_key.key.ty())?,
            named_key.name
        ));
    }
    builder.push_line(&format!(
        "public {generics}{} {}({}) {{",
        imports.render_type(&injection.return_type)?,
        injection.factory_method,
        method_parameters.join(", ")
    ));
    builder.indent();
    let arguments: Vec<String> = injection
        .dependency_requests
        .iter()
        .map(|request| {
            if request.is_assisted || is_provider(request.key.ty()) {
                request.name.clone()
            } else {
                format!("{}.get()", request.name)
            }
        })
        .collect();
    builder.push_line(&format!(
        "return new {}({});",
        imports.render_type(&injection.target_type)?,
        arguments.join(", ")
    ));
    builder.dedent();
    builder.push_line("}");

    builder.dedent();
    builder.push_line("}");

    let mut unit = JavaCompilationUnit::new();
    unit.file_comment = Some(injection.flavor.file_comment().to_string());
    if !generated.package.is_empty() {
        unit.package_declaration = Some(generated.package.clone());
    }
    unit.imports = imports.imports();
    unit.type_declarations.push(builder.build());
    Ok(unit)
}
