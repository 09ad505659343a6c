use std::rc::Rc;

use boolparser::{
    error::RuntimeError,
    evaluate,
    host::{Host, MemoryStore, PassthroughMacros, PersistedStore, Scope, VariableMacros},
    interpreter::{
        parser::Parser,
        value::{closure::ClosureRef, core::Value},
    },
};

struct Fixture {
    scope:   Scope,
    session: Rc<MemoryStore>,
    global:  Rc<MemoryStore>,
    host:    Host,
}

impl Fixture {
    fn new(session: MemoryStore, global: MemoryStore) -> Self {
        let session = Rc::new(session);
        let global = Rc::new(global);
        let macros = Rc::new(VariableMacros::new(session.clone(), global.clone()));
        let host = Host::new(session.clone(), global.clone(), macros);
        Self { scope: Scope::new(),
               session,
               global,
               host }
    }

    fn empty() -> Self {
        Self::new(MemoryStore::new(), MemoryStore::new())
    }

    fn run(&self, src: &str) -> Value {
        evaluate(src, true, &self.scope, &self.host).unwrap_or_else(|e| {
                                                        panic!("Expression failed: {src}\nError: \
                                                                {e}")
                                                    })
    }
}

#[test]
fn leading_assignment_stores_text_and_returns_it() {
    let fixture = Fixture::empty();

    assert_eq!(fixture.run("x = 5"), Value::from("5"));
    assert_eq!(fixture.scope.get("x"), Some(Value::from("5")));
    assert_eq!(fixture.run("x"), Value::Number(5.0));
}

#[test]
fn assignment_takes_the_whole_rest_of_the_input() {
    let fixture = Fixture::empty();

    assert_eq!(fixture.run("flag = 1 == 1 and 2 > 1"), Value::from("true"));
    assert_eq!(fixture.run("flag"), Value::Bool(true));
    assert_eq!(fixture.run("items = [1, 2]"), Value::from("[1,2]"));
    assert_eq!(fixture.run("2 in items"), Value::Bool(true));
}

#[test]
fn compound_assignment_uses_the_current_value() {
    let fixture = Fixture::empty();
    fixture.scope.declare("x", Value::from("5"));
    fixture.scope.declare("s", Value::from("a"));

    assert_eq!(fixture.run("x += 2"), Value::from("7"));
    assert_eq!(fixture.run("x -= 1"), Value::from("6"));
    assert_eq!(fixture.run("x *= 3"), Value::from("18"));
    assert_eq!(fixture.run("x /= 4"), Value::from("4.5"));
    assert_eq!(fixture.run("s += 'b'"), Value::from("ab"));
}

#[test]
fn post_increment_in_a_loop_condition() {
    let fixture = Fixture::empty();
    fixture.scope.declare("i", Value::Number(0.0));

    let mut parser = Parser::new(&fixture.scope, std::iter::empty(), fixture.host.clone());
    let condition = parser.parse("(i++ < 3)", true).unwrap();

    let results: Vec<Value> = (0..4).map(|_| condition.eval().unwrap()).collect();
    assert_eq!(results,
               vec![Value::Bool(true), Value::Bool(true), Value::Bool(true), Value::Bool(false)]);
    assert_eq!(fixture.run("i"), Value::Number(4.0));
}

#[test]
fn pre_and_post_steps_return_new_and_old_values() {
    let fixture = Fixture::empty();
    fixture.scope.declare("n", Value::from("1"));

    assert_eq!(fixture.run("++n"), Value::Number(2.0));
    assert_eq!(fixture.run("n--"), Value::Number(2.0));
    assert_eq!(fixture.run("n"), Value::Number(1.0));
    assert_eq!(fixture.run("--n == 0"), Value::Bool(true));
}

#[test]
fn local_shadows_session() {
    let fixture = Fixture::new(MemoryStore::new().with("mood", "sad"), MemoryStore::new());
    fixture.scope.declare("mood", Value::from("happy"));

    assert_eq!(fixture.run("mood"), Value::from("happy"));
    fixture.run("mood = 'calm'");

    assert_eq!(fixture.scope.get("mood"), Some(Value::from("calm")));
    assert_eq!(fixture.session.get("mood").as_deref(), Some("sad"));
    assert_eq!(fixture.session.flush_count(), 0);
}

#[test]
fn session_writes_flush_the_session() {
    let fixture = Fixture::new(MemoryStore::new().with("count", "1"), MemoryStore::new());

    assert_eq!(fixture.run("count += 1"), Value::from("2"));
    assert_eq!(fixture.session.get("count").as_deref(), Some("2"));
    assert_eq!(fixture.session.flush_count(), 1);
    assert_eq!(fixture.global.flush_count(), 0);
    assert!(!fixture.scope.exists("count"));
}

#[test]
fn global_writes_flush_the_global_store() {
    let fixture = Fixture::new(MemoryStore::new(), MemoryStore::new().with("total", "10"));

    assert_eq!(fixture.run("total++"), Value::Number(10.0));
    assert_eq!(fixture.global.get("total").as_deref(), Some("11"));
    assert_eq!(fixture.global.flush_count(), 1);
    assert_eq!(fixture.session.flush_count(), 0);
}

#[test]
fn session_shadows_global() {
    let fixture = Fixture::new(MemoryStore::new().with("name", "\"session\""),
                               MemoryStore::new().with("name", "global"));

    assert_eq!(fixture.run("name"), Value::from("session"));
}

#[test]
fn unknown_variables_are_declared_in_the_callers_scope() {
    let fixture = Fixture::empty();

    assert_eq!(fixture.run("missing"), Value::from(""));
    fixture.run("fresh = 3");
    assert!(fixture.scope.exists_in_scope("fresh"));
    assert!(!fixture.session.exists("fresh"));
    assert_eq!(fixture.session.flush_count(), 0);
}

#[test]
fn writes_reach_the_nearest_declaring_scope() {
    let fixture = Fixture::empty();
    fixture.scope.declare("depth", Value::from("1"));
    let inner = fixture.scope.child();

    evaluate("depth = 2", true, &inner, &fixture.host).unwrap();

    assert!(!inner.exists_in_scope("depth"));
    assert_eq!(fixture.scope.get("depth"), Some(Value::from("2")));
}

#[test]
fn named_arguments_are_private_to_the_parser() {
    let fixture = Fixture::empty();
    let arguments = [("limit".to_string(), Value::Number(3.0)),
                     ("_hidden".to_string(), Value::from("secret"))];
    let mut parser = Parser::new(&fixture.scope, arguments, fixture.host.clone());

    assert_eq!(parser.parse("limit > 2", true).unwrap().eval().unwrap(), Value::Bool(true));
    assert_eq!(parser.parse("_hidden", true).unwrap().eval().unwrap(), Value::from(""));
    assert!(!fixture.scope.exists("limit"));

    parser.parse("limit = 5", true).unwrap().eval().unwrap();
    assert_eq!(fixture.scope.get("limit"), Some(Value::from("5")));
    assert_eq!(parser.parse("limit", true).unwrap().eval().unwrap(), Value::Number(3.0));
}

#[test]
fn stored_text_is_decoded_as_json() {
    let fixture = Fixture::empty();
    fixture.scope.declare("list", Value::from("[1, \"two\"]"));
    fixture.scope.declare("dict", Value::from("{\"key\": 1}"));
    fixture.scope.declare("quoted", Value::from("\"5\""));
    fixture.scope.declare("null", Value::from("null"));

    assert_eq!(fixture.run("'two' in list"), Value::Bool(true));
    assert_eq!(fixture.run("dict is dictionary"), Value::Bool(true));
    assert_eq!(fixture.run("'key' in dict"), Value::Bool(true));
    assert_eq!(fixture.run("quoted is string"), Value::Bool(true));
    assert_eq!(fixture.run("null"), Value::from("null"));
}

#[test]
fn closures_are_opaque_but_typed() {
    let fixture = Fixture::empty();
    let closure = ClosureRef::new(|| 42);
    let mut parser = Parser::new(&fixture.scope,
                                 [("f".to_string(), Value::from(closure))],
                                 fixture.host.clone());

    assert_eq!(parser.parse("f is closure", true).unwrap().eval().unwrap(), Value::Bool(true));
    assert_eq!(parser.parse("f == f", true).unwrap().eval().unwrap(), Value::Bool(true));
    assert_eq!(parser.parse("f is string", true).unwrap().eval().unwrap(), Value::Bool(false));
}

#[test]
fn macros_expand_into_values() {
    let fixture = Fixture::new(MemoryStore::new().with("flag", "true"),
                               MemoryStore::new().with("name", "bob"));
    fixture.scope.declare("x", Value::from("5"));
    fixture.scope.declare("items", Value::from("[1,2]"));

    assert_eq!(fixture.run("{{var::x}} > 4"), Value::Bool(true));
    assert_eq!(fixture.run("{{getvar::flag}} == true"), Value::Bool(true));
    assert_eq!(fixture.run("2 in {{var::items}}"), Value::Bool(true));
    assert_eq!(fixture.run("{{getglobalvar::name}} == 'bob'"), Value::Bool(true));
    assert_eq!(fixture.run("{{var::missing}}"), Value::from(""));
}

#[test]
fn macros_are_expanded_on_every_evaluation() {
    let fixture = Fixture::empty();
    fixture.scope.declare("x", Value::from("1"));

    let mut parser = Parser::new(&fixture.scope, std::iter::empty(), fixture.host.clone());
    let thunk = parser.parse("{{var::x}}", true).unwrap();

    assert_eq!(thunk.eval().unwrap(), Value::Number(1.0));
    fixture.scope.set("x", Value::from("2"));
    assert_eq!(thunk.eval().unwrap(), Value::Number(2.0));
}

#[test]
fn closures_can_expand_macros() {
    let session = Rc::new(MemoryStore::new());
    let global = Rc::new(MemoryStore::new());

    let regex = Host::new(session.clone(),
                          global.clone(),
                          Rc::new(|_raw: &str, _scope: &Scope| "/ab+c/i".to_string()));
    assert_eq!(evaluate("{anything} == 'xABBC'", true, &Scope::new(), &regex).unwrap(),
               Value::Bool(true));

    let broken = Host::new(session.clone(),
                           global.clone(),
                           Rc::new(|_raw: &str, _scope: &Scope| "[1,".to_string()));
    let thunk = boolparser::parse("{anything}", true, &Scope::new(), &broken).unwrap();
    assert!(matches!(thunk.eval(), Err(RuntimeError::MacroExpansion { .. })));

    let passthrough = Host::new(session, global, Rc::new(PassthroughMacros));
    assert_eq!(evaluate("{raw}", true, &Scope::new(), &passthrough).unwrap(),
               Value::from("{raw}"));
}
