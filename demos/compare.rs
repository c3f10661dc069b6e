//! Prints a handful of formatted comparisons and arithmetic edge cases.

use uint128::U128;

#[allow(clippy::eq_op)]
fn main() {
    let a = U128::new(1, 2);
    let b = U128::new(0, 3);

    let x = 0u64;
    let y = 1u64;
    println!("native: 0u64 - 1u64 = {:#X}", x.wrapping_sub(y));

    println!("a({a:#X}) == b({b:b})?  {}", a == b);
    println!("a({a:#X}) == a({a:b})?  {}", a == a);

    println!("underflow wraps like the native words do:");
    let one = U128::new(0, 1);
    for w in [U128::new(0, 1), U128::new(0, 2)] {
        println!("\t{one:#X} - {w:#X} = {:#X}", one - w);
    }

    println!("MAX + 1 = {:#X}", U128::MAX + one);
    println!(
        "(0, 2^32) * (0, 2^32) = {:#X}",
        U128::from(1u64 << 32) * U128::from(1u64 << 32)
    );
    println!("MAX as decimal: {}", U128::MAX);
}
