//! Unit tests for declarations

use quiver_domain::{
    ClassName, ConstructorElement, ElementId, FieldElement, KotlinKind, MethodElement, Modifiers,
    ParameterElement, TypeElement, TypeRef,
};

fn car() -> TypeElement {
    TypeElement::class(ClassName::new("com.example", "Car"))
        .with_type_parameter("T")
        .with_constructor(
            ConstructorElement::new()
                .with_parameter(ParameterElement::new("engine", TypeRef::declared("com.example.Engine"))),
        )
        .with_field(FieldElement::new("wheels", TypeRef::Primitive("int".into())))
        .with_method(MethodElement::new("drive", TypeRef::Void))
        .with_method(MethodElement::new("park", TypeRef::Void))
}

#[test]
fn test_member_ids() {
    let car = car();
    let owner = car.name.clone();

    let methods: Vec<_> = car.methods().map(|m| m.id).collect();
    assert_eq!(
        methods,
        vec![
            ElementId::Method {
                owner: owner.clone(),
                name: "drive".into(),
                index: 0
            },
            ElementId::Method {
                owner: owner.clone(),
                name: "park".into(),
                index: 1
            },
        ]
    );

    let constructor = car.constructors().next().unwrap();
    let parameters = constructor.parameters();
    assert_eq!(parameters.len(), 1);
    assert_eq!(parameters[0].id, constructor.id.parameter(0, "engine"));
    assert_eq!(parameters[0].name, "engine");
}

#[test]
fn test_lookup_by_name() {
    let car = car();
    assert!(car.method("park").is_some());
    assert!(car.method("fly").is_none());
    assert_eq!(car.field("wheels").map(|f| f.ty.clone()), Some(TypeRef::Primitive("int".into())));
}

#[test]
fn test_as_type_uses_type_variables() {
    let car = car();
    assert_eq!(car.as_type().to_string(), "com.example.Car<T>");
}

#[test]
fn test_kotlin_object_and_modifiers() {
    let object = TypeElement::class(ClassName::new("com.example", "Registry"))
        .with_kotlin(KotlinKind::CompanionObject);
    assert!(object.is_kotlin_object());
    assert!(!car().is_kotlin_object());
    assert!(Modifiers::private().is_private());
    assert!(!Modifiers::default().is_private());
}
