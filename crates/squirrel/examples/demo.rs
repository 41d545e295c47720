//! Demo orbiting a camera around the origin and printing its pose.
//!
//! Run with `RUST_LOG=trace` to see when the model matrix is rebuilt.

use squirrel::*;

fn main() -> Result<()> {
    let ctx = init()?;

    let mut camera = Camera::new(16.0 / 9.0);
    camera.transform.set_position(Vec3::new(0.0, 0.0, 10.0));

    for step in 0..8 {
        camera.rotate_yaw(45.0);
        let model = camera.transform.matrix();
        println!(
            "step {step}: position {:?} forward {:?}",
            camera.transform.position(),
            camera.transform.forward_vector()
        );
        log::debug!("model matrix {model:?}");
    }

    // A prop that faces the camera, then scales up
    let mut prop = ctx.new_transform();
    ctx.look(&mut prop, camera.transform.position());
    prop.scale_by(2.0);
    println!("prop rotation (degrees) {:?}", prop.euler_angles_degrees());
    println!("prop uniforms {:?}", prop.uniforms());

    Ok(())
}
