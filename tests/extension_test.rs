use solid_recipe::dip::{Computer, Keyboard, MembraneKeyboard};
use solid_recipe::isp::{print_document, scan_document, AllInOnePrinter, Printer, Scanner};
use solid_recipe::mock::MockKeyboard;
use solid_recipe::ocp::{self, total_area, Circle, Shape, Square};
use solid_recipe::polymorphism;
use std::io::Write;

/// Pattern: consumer with a mocked dependency.
/// `Computer::input` must reach the injected keyboard exactly once, and do nothing else.
#[test]
fn test_computer_delegates_exactly_once() {
    let mock = MockKeyboard::new();
    mock.expect_type_keys(1);

    let computer = Computer::new(Box::new(mock.keyboard()));
    let mut out = Vec::new();
    computer.input(&mut out).unwrap();

    mock.verify();
    assert_eq!(mock.calls(), 1);
    assert!(out.is_empty(), "Computer wrote output of its own");
}

#[test]
fn test_computer_delegates_on_every_input() {
    let mock = MockKeyboard::new();
    mock.expect_type_keys(3);

    let computer = Computer::new(Box::new(mock.keyboard()));
    for _ in 0..3 {
        computer.input(&mut Vec::new()).unwrap();
    }

    mock.verify();
}

/// A keyboard that lives outside the crate.
struct VirtualKeyboard;

impl Keyboard for VirtualKeyboard {
    fn type_keys(&self, out: &mut dyn Write) -> solid_recipe::Result<()> {
        writeln!(out, "Typing on Virtual Keyboard")?;
        Ok(())
    }
}

#[test]
fn test_computer_accepts_foreign_keyboards() {
    let keyboards: Vec<Box<dyn Keyboard>> = vec![Box::new(MembraneKeyboard), Box::new(VirtualKeyboard)];
    let mut out = Vec::new();
    for keyboard in keyboards {
        Computer::new(keyboard).input(&mut out).unwrap();
    }
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Typing on Membrane Keyboard\nTyping on Virtual Keyboard\n"
    );
}

#[test]
fn test_all_in_one_serves_each_narrow_consumer() {
    let device = AllInOnePrinter;
    let printer: &dyn Printer = &device;
    let scanner: &dyn Scanner = &device;

    let mut printed = Vec::new();
    print_document(printer, &mut printed).unwrap();
    let mut scanned = Vec::new();
    scan_document(scanner, &mut scanned).unwrap();

    assert_eq!(printed, b"Printing\n");
    assert_eq!(scanned, b"Scanning\n");
}

/// A shape added downstream, with no edits to any existing shape or to `total_area`.
struct Rectangle {
    width: f64,
    height: f64,
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[test]
fn test_new_shape_needs_only_a_new_type() {
    let square = Square::new(3.0);
    let rectangle = Rectangle { width: 2.0, height: 5.0 };
    assert_eq!(total_area(&[&square, &rectangle]), 19.0);

    let mut out = Vec::new();
    ocp::describe(&rectangle, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Rectangle area: 10.000\n");
}

#[test]
fn test_shapes_load_from_json() {
    let circle: Circle = serde_json::from_str(r#"{ "radius": 2.0 }"#).unwrap();
    let square: Square = serde_json::from_str(r#"{ "side": 3.0 }"#).unwrap();

    assert!((circle.area() - 12.566).abs() < 1e-3);
    assert_eq!(square.area(), 9.0);
    assert_eq!(serde_json::to_string(&square).unwrap(), r#"{"side":3.0}"#);
}

/// A drawable shape added downstream is drawn by `draw_all` like the built-ins.
struct Star;

impl polymorphism::Shape for Star {
    fn draw(&self, out: &mut dyn Write) -> solid_recipe::Result<()> {
        writeln!(out, "Drawing star")?;
        Ok(())
    }
}

#[test]
fn test_draw_all_dispatches_to_foreign_shapes() {
    let shapes: Vec<Box<dyn polymorphism::Shape>> = vec![Box::new(polymorphism::Circle), Box::new(Star)];
    let mut out = Vec::new();
    polymorphism::draw_all(&shapes, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Drawing circle\nDrawing star\n");
}
