use pandora::fixed_vector;
use pandora::vec::{Vec3f, Vec4d};
use pandora::mat::Mat3x3f;
use std::time::Instant;

pub fn main() {
    let x: Vec3f = fixed_vector![3.0, 4.0, 0.0];
    let y: Vec3f = fixed_vector![0.0, 1.0, 0.0];

    let start = Instant::now();
    let d = x.distance(&y);
    let duration = start.elapsed();
    println!("{:?}", duration);
    println!("distance {} -> {} = {}", x, y, d);

    let dot = x.dot(&y);
    println!("|x| = {}, x.y = {}, angle = {}", x.magnitude(), dot, x.angle_between(&y, dot));
    println!("x normalized = {}", x.copy_normalized());
    println!("x cross y = {}", x.cross_product(&y));

    let mut w = Vec4d::from_forward([1.0, -2.0, 3.0, -4.0].iter().copied());
    w.negative();
    println!("negated = {}", w);

    println!("{}", Mat3x3f::identity());
}
