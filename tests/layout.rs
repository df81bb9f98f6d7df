use std::sync::Arc;
use std::thread;
use tabrec::{Format, delimited_record, layout_of, to_data_row, to_header_row};

#[derive(Default)]
struct Shuffled {
    gamma: String,
    alpha: String,
    beta: String,
}

// Declaration order differs from column order on purpose.
delimited_record! {
    Shuffled {
        gamma: String [30],
        alpha: String [10],
        beta: String [20],
    }
}

#[test]
fn columns_follow_declared_order_not_struct_order() {
    let fmt = Format::default();
    assert_eq!(to_header_row::<Shuffled>(&fmt), "alpha\tbeta\tgamma\n");

    let r = Shuffled {
        gamma: "g".into(),
        alpha: "a".into(),
        beta: "b".into(),
    };
    assert_eq!(to_data_row(&r, &fmt), "a\tb\tg\n");
}

#[test]
fn orders_need_not_be_contiguous() {
    let layout = layout_of::<Shuffled>();
    let orders: Vec<i32> = layout.fields().iter().map(|f| f.order).collect();
    assert_eq!(orders, vec![10, 20, 30]);
}

#[derive(Default)]
struct Tied {
    second: u32,
    first: u32,
    last: u32,
}

// Equal orders: declaration order decides.
delimited_record! {
    Tied {
        second: u32 [1],
        first: u32 [1],
        last: u32 [2],
    }
}

#[test]
fn equal_orders_keep_declaration_order() {
    let fmt = Format::default();
    assert_eq!(to_header_row::<Tied>(&fmt), "second\tfirst\tlast\n");
}

#[derive(Default)]
struct Labeled {
    id: u32,
    full_name: String,
}

delimited_record! {
    Labeled {
        id: u32 [1],
        full_name: String [2, "Full Name"],
    }
}

#[test]
fn label_overrides_fall_back_to_field_name() {
    let layout = layout_of::<Labeled>();
    assert_eq!(layout.labels(), &["id", "Full Name"]);
    assert_eq!(layout.fields()[1].name, "full_name");
    assert_eq!(
        layout.fields()[1].value_type.id,
        std::any::TypeId::of::<String>()
    );
}

#[derive(Default)]
struct Opaque {
    _internal: u32,
}

// No serializable fields at all.
delimited_record!(Opaque {});

#[test]
fn zero_field_types_produce_empty_rows() -> anyhow::Result<()> {
    let fmt = Format::default();
    assert!(layout_of::<Opaque>().is_empty());
    assert_eq!(to_header_row::<Opaque>(&fmt), "\n");
    assert_eq!(to_data_row(&Opaque::default(), &fmt), "\n");

    let text = tabrec::to_delimited_text(&[Opaque::default(), Opaque::default()], true, &fmt);
    assert_eq!(text, "\n\n\n");

    let back: Vec<Opaque> = tabrec::from_delimited_text(&text, true, &fmt)?;
    assert_eq!(back.len(), 2);
    Ok(())
}

#[derive(Default)]
struct Partial {
    kept: u32,
    ignored: String,
}

delimited_record! {
    Partial {
        kept: u32 [1],
    }
}

#[test]
fn unregistered_fields_are_invisible() {
    let fmt = Format::default();
    let r = Partial {
        kept: 7,
        ignored: "secret".into(),
    };
    assert_eq!(to_header_row::<Partial>(&fmt), "kept\n");
    assert_eq!(to_data_row(&r, &fmt), "7\n");
}

#[test]
fn resolution_is_memoized() {
    let first = layout_of::<Shuffled>();
    let second = layout_of::<Shuffled>();
    assert!(Arc::ptr_eq(&first, &second));
}

#[derive(Default)]
struct Raced {
    a: u32,
    b: u32,
}

delimited_record! {
    Raced {
        b: u32 [2],
        a: u32 [1],
    }
}

#[test]
fn concurrent_first_resolution_agrees() {
    let fmt = Format::default();
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let fmt = fmt.clone();
            thread::spawn(move || {
                let r = Raced { a: 1, b: 2 };
                (to_header_row::<Raced>(&fmt), to_data_row(&r, &fmt))
            })
        })
        .collect();

    for handle in handles {
        let (header, row) = handle.join().unwrap();
        assert_eq!(header, "a\tb\n");
        assert_eq!(row, "1\t2\n");
    }

    // And the cache settled on a single layout.
    assert!(Arc::ptr_eq(&layout_of::<Raced>(), &layout_of::<Raced>()));
}
