#![allow(dead_code)]

use aj_model::{
    known, Annotation, AnnotationArgument, AnnotationValue, ClassName, Constructor, JavaType,
    Method, Modifiers, Parameter, Span, TypeDeclaration, TypeKind,
};

pub fn dummy_span() -> Span {
    Span::dummy()
}

pub fn string_type() -> JavaType {
    JavaType::declared(ClassName::top_level("java.lang", "String"))
}

pub fn long_type() -> JavaType {
    JavaType::declared(ClassName::top_level("java.lang", "Long"))
}

pub fn param(name: &str, ty: JavaType) -> Parameter {
    Parameter {
        name: name.to_string(),
        ty,
        annotations: Vec::new(),
        span: dummy_span(),
    }
}

pub fn assisted_param(name: &str, ty: JavaType) -> Parameter {
    let mut parameter = param(name, ty);
    parameter
        .annotations
        .push(Annotation::marker(known::ASSISTED.clone()));
    parameter
}

pub fn empty_type(name: ClassName, kind: TypeKind) -> TypeDeclaration {
    TypeDeclaration {
        name,
        kind,
        modifiers: Modifiers::default(),
        annotations: Vec::new(),
        type_parameters: Vec::new(),
        supertypes: Vec::new(),
        constructors: Vec::new(),
        methods: Vec::new(),
        nested: Vec::new(),
        enclosing_kind: None,
        span: dummy_span(),
    }
}

pub fn assisted_constructor(parameters: Vec<Parameter>) -> Constructor {
    Constructor {
        modifiers: Modifiers::default(),
        annotations: vec![Annotation::marker(known::ASSISTED_INJECT.clone())],
        parameters,
        span: dummy_span(),
    }
}

pub fn factory_interface(target: &ClassName, parameters: Vec<Parameter>) -> TypeDeclaration {
    let mut factory = empty_type(target.nested("Factory"), TypeKind::Interface);
    factory
        .annotations
        .push(Annotation::marker(known::ASSISTED_INJECT_FACTORY.clone()));
    factory.enclosing_kind = Some(TypeKind::Class);
    factory.methods.push(Method {
        name: "create".to_string(),
        modifiers: Modifiers {
            is_abstract: true,
            ..Modifiers::default()
        },
        annotations: Vec::new(),
        parameters,
        return_type: JavaType::declared(target.clone()),
        span: dummy_span(),
    });
    factory
}

/// `class <name> { @AssistedInject <name>(Long foo, @Assisted String bar) {}
/// @AssistedInject.Factory interface Factory { <name> create(String bar); } }`
pub fn assisted_target(package: &str, name: &str) -> TypeDeclaration {
    let class_name = ClassName::top_level(package, name);
    let mut target = empty_type(class_name.clone(), TypeKind::Class);
    target.constructors.push(assisted_constructor(vec![
        param("foo", long_type()),
        assisted_param("bar", string_type()),
    ]));
    target
        .nested
        .push(factory_interface(&class_name, vec![param("bar", string_type())]));
    target
}

/// `@AssistedModule @Module(includes = {…}) abstract class <name> {}`
pub fn assisted_module_decl(name: ClassName, includes: Vec<ClassName>) -> TypeDeclaration {
    module_decl(name, includes, &known::ASSISTED_MODULE)
}

pub fn inflation_module_decl(name: ClassName, includes: Vec<ClassName>) -> TypeDeclaration {
    module_decl(name, includes, &known::INFLATION_MODULE)
}

fn module_decl(name: ClassName, includes: Vec<ClassName>, marker: &ClassName) -> TypeDeclaration {
    let mut module = empty_type(name, TypeKind::Class);
    module.modifiers.is_abstract = true;
    module.annotations.push(Annotation::marker(marker.clone()));
    let includes_value = AnnotationValue::Array(
        includes
            .into_iter()
            .map(|include| AnnotationValue::Type(JavaType::declared(include)))
            .collect(),
    );
    module.annotations.push(Annotation::with_arguments(
        known::DAGGER_MODULE.clone(),
        vec![AnnotationArgument::Named {
            name: "includes".to_string(),
            value: includes_value,
        }],
    ));
    module
}

/// A view class eligible for inflation injection.
pub fn inflation_target(package: &str, name: &str) -> TypeDeclaration {
    let class_name = ClassName::top_level(package, name);
    let mut target = empty_type(class_name, TypeKind::Class);
    target
        .supertypes
        .push(JavaType::declared(known::VIEW.clone()));
    target.constructors.push(Constructor {
        modifiers: Modifiers::default(),
        annotations: vec![Annotation::marker(known::INFLATION_INJECT.clone())],
        parameters: vec![
            assisted_param("context", JavaType::declared(known::CONTEXT.clone())),
            assisted_param("attrs", JavaType::declared(known::ATTRIBUTE_SET.clone())),
            param("dep", long_type()),
        ],
        span: dummy_span(),
    });
    target
}

pub fn view_class_decl() -> TypeDeclaration {
    empty_type(known::VIEW.clone(), TypeKind::Class)
}
