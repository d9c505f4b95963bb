use criterion::{black_box, criterion_group, criterion_main, Criterion};
use oncoscore_classifier::{
    Activation, Dense, FeatureVector, Graph, InferenceEngine, Layer, Predictor, StandardScaler,
    FEATURE_COUNT,
};
use std::sync::Arc;

fn sample_predictor() -> Predictor {
    // 30 -> 16 (relu) -> 1 (sigmoid), the size of the shipped classifier.
    let hidden = Dense::new(
        (0..FEATURE_COUNT)
            .map(|i| (0..16).map(|j| ((i * 16 + j) % 7) as f32 * 0.01 - 0.03).collect())
            .collect(),
        vec![0.01; 16],
        Activation::Relu,
    );
    let head = Dense::new(vec![vec![0.1]; 16], vec![-0.2], Activation::Sigmoid);
    let graph = Graph::new(FEATURE_COUNT, vec![Layer::Dense(hidden), Layer::Dense(head)]);

    let engine = InferenceEngine::from_graph(graph).expect("valid graph");
    let scaler = StandardScaler::new(vec![0.0; FEATURE_COUNT], vec![1.0; FEATURE_COUNT])
        .expect("valid scaler");
    Predictor::new(Arc::new(scaler), Arc::new(engine)).expect("matching widths")
}

fn bench_single_prediction(c: &mut Criterion) {
    let predictor = sample_predictor();
    let features = FeatureVector::from_slice(&[1.0; FEATURE_COUNT]).expect("30 values");

    c.bench_function("predict_single_row", |b| {
        b.iter(|| {
            let diagnosis = predictor.predict(black_box(&features));
            black_box(diagnosis).ok();
        });
    });
}

criterion_group!(classifier_benches, bench_single_prediction);
criterion_main!(classifier_benches);
