//! Closed-set polymorphism with `TaggedUnion`.
//!
//! This example demonstrates:
//! 1. Declaring an index-aligned discriminant enum with `tags!`
//! 2. Constructing and re-assigning alternatives by position
//! 3. Positional reads with `get`, and probing with `validate`
//! 4. Why the discriminant cannot be inferred from the written value

use trivium::prelude::*;

tags! {
    /// Positions of the `FieldValue` alternatives.
    ///
    /// The variant order must match the tuple below; that is the caller-side
    /// half of the contract the runtime validation enforces.
    pub enum FieldTag {
        Count,
        Label,
        Ratio,
        Flags,
    }
}

/// One record field: a count, a label, a ratio, or a flag word.
///
/// Note that `Count` and `Flags` are both `u32` — the discriminant decides
/// what a written `u32` *means*, which is exactly why writes name a position
/// instead of letting the type imply one.
type FieldValue = TaggedUnion<FieldTag, (u32, String, f64, u32)>;

const COUNT: usize = FieldTag::Count as usize;
const LABEL: usize = FieldTag::Label as usize;
const RATIO: usize = FieldTag::Ratio as usize;
const FLAGS: usize = FieldTag::Flags as usize;

fn describe(value: &FieldValue) -> String {
    match value.discriminant() {
        FieldTag::Count => format!("count of {}", value.get::<COUNT>()),
        FieldTag::Label => format!("label {:?}", value.get::<LABEL>()),
        FieldTag::Ratio => format!("ratio {:.2}", value.get::<RATIO>()),
        FieldTag::Flags => format!("flag word {:#010b}", value.get::<FLAGS>()),
    }
}

fn main() {
    println!("=== Closed-set dispatch ===\n");

    let mut field = FieldValue::new(FieldTag::Count, 3_u32);
    println!("{}", describe(&field));

    // Same storage slot, different alternative. The outgoing `u32` is
    // dropped, the incoming `String` takes its place.
    field.assign(FieldTag::Label, String::from("retries"));
    println!("{}", describe(&field));

    field.assign(FieldTag::Ratio, 0.6180_f64);
    println!("{}", describe(&field));

    // A `u32` is acceptable at two positions; each write names which one is
    // meant, and `validate` answers without touching anything.
    println!();
    println!(
        "u32 at Count? {}   u32 at Flags? {}   u32 at Label? {}",
        FieldValue::validate::<u32>(FieldTag::Count),
        FieldValue::validate::<u32>(FieldTag::Flags),
        FieldValue::validate::<u32>(FieldTag::Label),
    );

    field.assign(FieldTag::Flags, 0b1010_u32);
    println!("\n{}", describe(&field));
    println!("{field:?}");

    // Moving the live alternative out consumes the union without running
    // its destructor a second time.
    field.assign(FieldTag::Label, String::from("owned again"));
    let label: String = field.into_alternative::<LABEL>();
    println!("moved out: {label:?}");
}
