use crate::builder::{JavaCompilationUnit, JavaSourceBuilder};
use crate::config::JavaCodeGenConfig;
use crate::error::CodeGenError;
use crate::imports::ImportManager;
use aj_model::{
    factory_name, known, Annotation, AnnotationArgument, AnnotationValue, AssistedInjectionModule,
    Flavor, InflationInjectionModule, Literal,
};

/// Render the generated Dagger module: an abstract `@Module` class with one
/// `@Binds` method per factory, sorted by target name so repeated
/// compilations emit byte-identical source.
pub fn generate_assisted_module(
    module: &AssistedInjectionModule,
    config: &JavaCodeGenConfig,
) -> Result<JavaCompilationUnit, CodeGenError> {
    let generated = module.generated_type();
    let mut imports = ImportManager::new(&generated.package);
    let mut builder = JavaSourceBuilder::new(config.indent.clone());

    builder.push_line(&imports.render_annotation(&Annotation::marker(known::DAGGER_MODULE.clone())));
    for annotation in &module.extra_annotations {
        builder.push_line(&imports.render_annotation(annotation));
    }
    let visibility = if module.public { "public " } else { "" };
    builder.push_line(&format!(
        "{visibility}abstract class {} {{",
        generated.simple_name()
    ));
    builder.indent();
    builder.push_line(&format!("private {}() {{}}", generated.simple_name()));

    for (target, factory_type) in &module.bindings {
        builder.push_line("");
        builder.push_line(&imports.render_annotation(&Annotation::marker(known::DAGGER_BINDS.clone())));
        builder.push_line(&format!(
            "abstract {} {}({} factory);",
            imports.reference(factory_type),
            target.bind_method_name(),
            imports.reference(&factory_name(target, Flavor::AssistedInject))
        ));
    }

    builder.dedent();
    builder.push_line("}");

    Ok(assemble(
        "Generated by @AssistedModule. Do not modify!",
        &generated.package,
        imports,
        builder,
    ))
}

/// Render the generated inflation module: one map binding per injected view,
/// keyed by the view's binary name.
pub fn generate_inflation_module(
    module: &InflationInjectionModule,
    config: &JavaCodeGenConfig,
) -> Result<JavaCompilationUnit, CodeGenError> {
    let generated = module.generated_type();
    let mut imports = ImportManager::new(&generated.package);
    let mut builder = JavaSourceBuilder::new(config.indent.clone());

    builder.push_line(&imports.render_annotation(&Annotation::marker(known::DAGGER_MODULE.clone())));
    for annotation in &module.extra_annotations {
        builder.push_line(&imports.render_annotation(annotation));
    }
    let visibility = if module.public { "public " } else { "" };
    builder.push_line(&format!(
        "{visibility}abstract class {} {{",
        generated.simple_name()
    ));
    builder.indent();
    builder.push_line(&format!("private {}() {{}}", generated.simple_name()));

    let mut injected = module.injected_names.clone();
    injected.sort();
    for target in &injected {
        builder.push_line("");
        builder.push_line(&imports.render_annotation(&Annotation::marker(known::DAGGER_BINDS.clone())));
        builder.push_line(&imports.render_annotation(&Annotation::marker(known::INTO_MAP.clone())));
        let string_key = Annotation::with_arguments(
            known::STRING_KEY.clone(),
            vec![AnnotationArgument::Positional {
                value: AnnotationValue::Literal(Literal::String(target.reflection_name())),
            }],
        );
        builder.push_line(&imports.render_annotation(&string_key));
        builder.push_line(&format!(
            "abstract {} {}({} factory);",
            imports.reference(&known::VIEW_FACTORY),
            target.bind_method_name(),
            imports.reference(&factory_name(target, Flavor::InflationInject))
        ));
    }

    builder.dedent();
    builder.push_line("}");

    Ok(assemble(
        "Generated by @InflationModule. Do not modify!",
        &generated.package,
        imports,
        builder,
    ))
}

fn assemble(
    comment: &str,
    package: &str,
    imports: ImportManager,
    builder: JavaSourceBuilder,
) -> JavaCompilationUnit {
    let mut unit = JavaCompilationUnit::new();
    unit.file_comment = Some(comment.to_string());
    if !package.is_empty() {
        unit.package_declaration = Some(package.to_string());
    }
    unit.imports = imports.imports();
    unit.type_declarations.push(builder.build());
    unit
}
