use std::sync::Arc;

use checkout::{
    AtomicOrderSequence, InMemoryPaymentMethod, PaymentMethod, Product, ShoppingCart, UserId,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

#[derive(Debug, Clone, PartialEq)]
struct BenchCandy {
    sku: u32,
    price: f64,
}

impl Product for BenchCandy {
    fn price(&self) -> f64 {
        self.price
    }
}

fn filled_cart(lines: u32) -> ShoppingCart<BenchCandy> {
    let mut cart = ShoppingCart::new(UserId::new());
    for sku in 0..lines {
        cart.add_item(
            BenchCandy {
                sku,
                price: 0.25 * f64::from(sku % 40 + 1),
            },
            (sku % 5) + 1,
        )
        .unwrap();
    }
    cart
}

fn bench_calculate_total(c: &mut Criterion) {
    let mut cart = filled_cart(100);
    cart.set_discount(0.1).unwrap();

    c.bench_function("checkout/calculate_total_100_lines", |b| {
        b.iter(|| black_box(cart.calculate_total()));
    });
}

fn bench_add_item_merge(c: &mut Criterion) {
    c.bench_function("checkout/add_item_merge", |b| {
        let mut cart = filled_cart(100);
        b.iter(|| {
            cart.add_item(
                BenchCandy {
                    sku: 50,
                    price: 0.25 * f64::from(50 % 40 + 1),
                },
                1,
            )
            .unwrap();
        });
    });
}

fn bench_create_order(c: &mut Criterion) {
    let cart = filled_cart(20);
    let sequence = AtomicOrderSequence::new();
    let payment_method: Arc<dyn PaymentMethod> = Arc::new(InMemoryPaymentMethod::new());

    c.bench_function("checkout/create_order_20_lines", |b| {
        b.iter(|| black_box(cart.create_order(Arc::clone(&payment_method), &sequence)));
    });
}

criterion_group!(
    benches,
    bench_calculate_total,
    bench_add_item_merge,
    bench_create_order
);
criterion_main!(benches);
