use hxweld::{
    render, render_with, Declaration, Module, Parameter, Property, RenderOptions, TypeRef,
    HAXE_KEYWORDS,
};
use pretty_assertions::assert_eq;

const THREE_JSON: &str = r#"[
    { "kind": "namespace", "name": "THREE", "body": [
        { "kind": "declaration", "name": "Side", "declarationKind": "enum",
          "values": ["FrontSide", "BackSide", "DoubleSide"] },
        { "kind": "declaration", "name": "Object3D", "members": [
            { "constructor": true, "params": [] },
            { "name": "id", "type": { "kind": "named", "name": "number" } },
            { "name": "name", "type": { "kind": "named", "name": "string" }, "optional": true },
            { "name": "children", "type": { "kind": "named", "name": "Object3D", "arrayDepth": 1 } },
            { "name": "add", "params": [
                { "name": "objects", "type": { "kind": "named", "name": "Object3D", "arrayDepth": 1 }, "varargs": true }
              ], "type": { "kind": "named", "name": "void" } },
            { "name": "traverse", "params": [
                { "name": "callback", "type": { "kind": "function",
                    "params": [ { "name": "object", "type": { "kind": "named", "name": "Object3D" } } ],
                    "returns": { "kind": "named", "name": "any" } } }
              ], "type": { "kind": "named", "name": "void" } }
        ] },
        { "kind": "declaration", "name": "Mesh", "extends": "Object3D", "implements": ["Disposable"], "members": [
            { "name": "default", "static": true, "type": { "kind": "named", "name": "Mesh" } }
        ] },
        { "kind": "declaration", "name": "Parameters", "declarationKind": "structural", "members": [
            { "name": "color", "type": { "kind": "named", "name": "number" }, "optional": true },
            { "name": "userData", "type": { "kind": "structural", "members": [
                { "dictionary": true, "type": { "kind": "named", "name": "any" } }
            ] } }
        ] },
        { "kind": "global", "name": "REVISION", "type": { "kind": "named", "name": "string" } },
        { "kind": "global", "name": "warn", "params": [
            { "name": "message", "type": { "kind": "named", "name": "string" }, "optional": true }
          ], "type": { "kind": "named", "name": "void" } }
    ] }
]"#;

const THREE_HX: &str = r#"@:native("THREE.Side")
@:fakeEnum(Int) extern enum Side {
    FrontSide;
    BackSide;
    DoubleSide;
}

@:native("THREE.Object3D")
extern class Object3D
{
    function new () :Void;
    var id :Float;
    var name :Null<String>;
    var children :Array<Object3D>;
    function add (?objects1 :Object3D, ?objects2 :Object3D, ?objects3 :Object3D) :Void;
    function traverse (callback_ :(Object3D -> Dynamic)) :Void;
}

@:native("THREE.Mesh")
extern class Mesh extends Object3D
    // implements Disposable
{
    @:native("default")
    static var default_ :Mesh;
}

@:native("THREE.Parameters")
typedef Parameters = {
    color :Null<Float>,
    userData :Dynamic<Dynamic>,
}

@:native("THREE")
extern class Globals
{
    static var REVISION :String;
    static function warn (?message :String) :Void;
}

"#;

fn three() -> Module {
    serde_json::from_str(THREE_JSON).unwrap()
}

#[test]
fn test_render_json_tree() {
    let module = three();
    assert!(module.validate().is_ok());

    let options = RenderOptions::default().with_varargs_arity(3);
    assert_eq!(render_with(&module, &options), THREE_HX);
}

#[test]
fn test_render_is_deterministic() {
    let module = three();
    assert_eq!(render(&module), render(&module));
}

#[test]
fn test_tree_survives_json_round_trip() {
    let module = three();
    let json = serde_json::to_string(&module).unwrap();
    let reparsed: Module = serde_json::from_str(&json).unwrap();
    assert_eq!(render(&module), render(&reparsed));
}

#[test]
fn test_every_keyword_member_keeps_native_name() {
    for keyword in HAXE_KEYWORDS {
        let module = Module::new()
            .declaration(Declaration::class("Foo").member(Property::field(*keyword, TypeRef::number())));
        let output = render(&module);

        assert!(output.contains(&format!("@:native(\"{}\")", keyword)));
        assert!(output.contains(&format!("var {}_ :Float;", keyword)));
    }
}

#[test]
fn test_class_body_has_one_line_per_member() {
    let names = ["a", "b", "c", "d"];
    let decl = names.iter().fold(Declaration::class("Foo"), |decl, name| {
        decl.member(Property::field(*name, TypeRef::string()))
    });
    let output = render(&Module::new().declaration(decl));

    let members: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("    "))
        .collect();
    assert_eq!(
        members,
        vec![
            "    var a :String;",
            "    var b :String;",
            "    var c :String;",
            "    var d :String;",
        ]
    );
}

#[test]
fn test_one_globals_class_per_level() {
    let module = Module::new()
        .global(Property::field("a", TypeRef::number()))
        .declaration(Declaration::class("First"))
        .global(Property::field("b", TypeRef::number()))
        .declaration(Declaration::class("Second"))
        .global(Property::field("c", TypeRef::number()));
    let output = render(&module);

    assert_eq!(output.matches("extern class Globals").count(), 1);
    let globals = output.find("extern class Globals").unwrap();
    assert!(output.find("extern class Second").unwrap() < globals);

    let statics: Vec<&str> = output[globals..]
        .lines()
        .filter(|line| line.contains("static var"))
        .collect();
    assert_eq!(
        statics,
        vec!["    static var a :Float;", "    static var b :Float;", "    static var c :Float;"]
    );
}

#[test]
fn test_nested_namespace_globals_are_separate() {
    let module = Module::new()
        .global(Property::field("top", TypeRef::number()))
        .namespace(
            "inner",
            Module::new().global(Property::field("nested", TypeRef::number())),
        );
    let output = render(&module);

    assert_eq!(output.matches("extern class Globals").count(), 2);
    assert!(output.starts_with("@:native(\"inner\")\nextern class Globals"));
}

#[test]
fn test_varargs_expand_to_nine_floats() {
    let module = Module::new().global(Property::method(
        "max",
        vec![Parameter::new("args", TypeRef::number().array(1)).varargs()],
        TypeRef::number(),
    ));
    let output = render(&module);

    for n in 1..=9 {
        assert!(output.contains(&format!("?args{} :Float", n)));
    }
    assert!(!output.contains("args10"));
    assert!(!output.contains("Array<"));
}

#[test]
fn test_tab_indentation() {
    let options = RenderOptions::default().with_indent("\t");
    let module = Module::new()
        .declaration(Declaration::class("Foo").member(Property::field("x", TypeRef::number())));
    assert_eq!(
        render_with(&module, &options),
        "extern class Foo\n{\n\tvar x :Float;\n}\n\n"
    );
}

#[test]
fn test_empty_module_renders_nothing() {
    assert_eq!(render(&Module::new()), "");
}
