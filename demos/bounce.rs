use planevec::*;
use std::error::Error;
use std::f64::consts::PI;

fn main() -> Result<(), Box<dyn Error>> {
    let floor_start = Vector::new(0.0, 0.0)?;
    let floor_end = Vector::new(40.0, 0.0)?;

    let mut position = Vector::new(2.0, 12.0)?;
    let mut velocity = Vector::from_polar(4.0, -PI / 3.0)?;
    let gravity = Vector::new(0.0, -1.5)?;

    for step in 0..12 {
        velocity = velocity.add(&gravity)?.clamp(10.0)?;
        position = position.add(&velocity)?;

        // reflect off the floor once the ball gets close enough
        if position.distance_to_segment(&floor_start, &floor_end) < 1.0 && velocity.y() < 0.0 {
            let (surface_normal, _) = floor_end.subtract(&floor_start)?.perpendiculars()?;
            let along_normal = velocity.proj(&surface_normal)?;
            velocity = velocity.subtract(&along_normal.multiply(2.0)?)?;
            position = Vector::new(position.x(), 1.0)?;
        }

        println!("step {:2}: position {} velocity {}", step, position, velocity);
    }

    Ok(())
}
