//! Guided tour of the toolkit with printed sample output.

use anyhow::Result;
use geomkit::prelude::*;
use std::rc::Rc;

pub fn run() -> Result<()> {
    println!("GEOMETRY TOOLKIT DEMONSTRATION\n");
    points();
    arrays_of_basic_types();
    figures_array()?;
    array_operations()?;
    println!("=== DEMONSTRATION COMPLETED SUCCESSFULLY ===");
    Ok(())
}

fn points() {
    tracing::info!(section = "points", "demo");
    println!("=== POINTS ===");
    println!("Integer point: {}", Point::new(5, 10));
    println!("Double point: {}", Point::new(3.25, 2.75));
    println!("Float point: {}", Point::new(1.5_f32, 2.5));

    let p1 = Point::new(1.0, 2.0);
    let p2 = Point::new(1.0, 2.0);
    let p3 = Point::new(1.0, 2.1);
    println!("p1 == p2: {}", p1 == p2);
    println!("p1 == p3: {}", p1 == p3);
    println!("p1 != p3: {}", p1 != p3);
    println!();
}

fn arrays_of_basic_types() {
    tracing::info!(section = "basic_arrays", "demo");
    println!("=== ARRAY WITH BASIC TYPES ===");
    let mut ints = DynamicArray::new();
    for i in 0..10 {
        ints.append(i * i);
    }
    print!("Integer array contents: ");
    ints.print();

    let mut strings = DynamicArray::new();
    strings.append("Hello").append("World").append("!");
    print!("\nString array contents: ");
    strings.print();
    println!("\n");
}

fn figures_array() -> Result<()> {
    tracing::info!(section = "figures", "demo");
    println!("=== ARRAY OF FIGURES ===");
    let triangle = Polygon::from_vertices(vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    ])?;
    let pentagon = Polygon::from_vertices(vec![
        Point::new(0.0, 1.0),
        Point::new(0.95, 0.31),
        Point::new(0.59, -0.81),
        Point::new(-0.59, -0.81),
        Point::new(-0.95, 0.31),
    ])?;
    let rect = quad_from(
        ShapeKind::Rectangle,
        [
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 2.0),
            Point::new(0.0, 2.0),
        ],
    )?;

    let mut figures: DynamicArray<Rc<dyn Figure>> = DynamicArray::new();
    figures
        .append(Rc::new(triangle))
        .append(Rc::new(pentagon))
        .append(Rc::new(rect));

    println!("Total figures in array: {}", figures.len());
    for (i, fig) in figures.iter().enumerate() {
        let c = fig.center()?;
        println!(
            "Figure {i} ({}) - area {:.3}, center ({:.3}, {:.3})",
            fig.label(),
            fig.area(),
            c.x,
            c.y
        );
        figures.print_at(i)?;
    }
    println!("\nTotal area of all figures: {:.3}\n", figures.total_area());
    Ok(())
}

fn array_operations() -> Result<()> {
    tracing::info!(section = "array_ops", "demo");
    println!("=== ARRAY OPERATIONS ===");
    let mut points = DynamicArray::new();
    for k in 1..=4 {
        points.append(Point::new(k as f64, k as f64));
    }
    print!("Initial array: ");
    points.print();

    points.remove(1)?;
    print!("\nAfter removing index 1: ");
    points.print();

    points
        .append(Point::new(5.0, 5.0))
        .append(Point::new(6.0, 6.0));
    print!("\nAfter adding more elements: ");
    points.print();

    println!("\nFinal size: {}", points.get_size());
    println!("Final capacity: {}\n", points.get_capacity());
    Ok(())
}
