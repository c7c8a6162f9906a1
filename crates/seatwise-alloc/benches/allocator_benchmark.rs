// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seatwise_alloc::{
    allocator::AllocatorBuilder,
    assignment::Assignment,
    conflict::AdjacencyConflict,
    pass::{GreedyPass, PlacementPass},
    pool::CandidatePool,
};
use seatwise_model::{
    academic::{Department, Semester},
    ids::{DepartmentId, RoomId, SemesterId, StudentId},
    model::{Model, ModelBuilder},
    room::Room,
    student::StudentRecord,
};
use std::hint::black_box;

const DEPARTMENTS: u64 = 4;
const SEMESTERS_PER_DEPARTMENT: u64 = 2;

/// Builds `rooms` rooms of `rows x columns` and `students` students spread
/// randomly over a fixed set of departments and semesters.
fn synthetic_model(rooms: usize, rows: usize, columns: usize, students: usize, seed: u64) -> Model {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = ModelBuilder::new();

    for d in 1..=DEPARTMENTS {
        builder.add_department(Department::new(
            DepartmentId::new(d),
            format!("D{d}"),
            format!("Department {d}"),
        ));
        for s in 1..=SEMESTERS_PER_DEPARTMENT {
            let id = (d - 1) * SEMESTERS_PER_DEPARTMENT + s;
            builder.add_semester(Semester::new(
                SemesterId::new(id),
                format!("D{d}-S{s}"),
                format!("Semester {s}"),
                DepartmentId::new(d),
            ));
        }
    }

    for r in 1..=rooms as u64 {
        builder.add_room(Room::new(
            RoomId::new(r),
            format!("R{r}"),
            format!("Room {r}"),
            rows,
            columns,
        ));
    }

    let semesters = DEPARTMENTS * SEMESTERS_PER_DEPARTMENT;
    for i in 1..=students as u64 {
        builder.add_student(StudentRecord::new(
            StudentId::new(i),
            format!("ROLL-{i:05}"),
            format!("Student {i}"),
            SemesterId::new(rng.random_range(1..=semesters)),
        ));
    }

    builder
        .build()
        .unwrap_or_else(|e| panic!("synthetic model is invalid: {}", e))
}

fn bench_greedy_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_pass");

    for &(rooms, students) in &[(1usize, 60usize), (5, 400), (20, 1600)] {
        let model = synthetic_model(rooms, 8, 10, students, 42);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut base = CandidatePool::from_model(&model);
        base.shuffle(&mut rng);

        let mut pool = CandidatePool::with_capacity(base.len());
        let mut assignment = Assignment::new(&model);
        let mut pass = GreedyPass::new(AdjacencyConflict::default());

        group.throughput(Throughput::Elements(students as u64));
        group.bench_with_input(
            BenchmarkId::new("rooms", format!("{rooms}x80/{students}")),
            &model,
            |b, model| {
                b.iter(|| {
                    pool.reset_from(&base);
                    assignment.clear();
                    black_box(pass.fill(black_box(model), &mut pool, &mut assignment))
                })
            },
        );
    }
    group.finish();
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");

    for &(rooms, students) in &[(5usize, 400usize), (20, 2000)] {
        let model = synthetic_model(rooms, 8, 10, students, 11);
        let mut allocator = AllocatorBuilder::new().with_seed(3).build();

        group.throughput(Throughput::Elements(students as u64));
        group.bench_with_input(
            BenchmarkId::new("rooms", format!("{rooms}x80/{students}")),
            &model,
            |b, model| {
                b.iter(|| {
                    let outcome = allocator
                        .allocate(black_box(model))
                        .unwrap_or_else(|e| panic!("allocation failed: {}", e));
                    black_box(outcome.plan().len())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_greedy_pass, bench_allocate);
criterion_main!(benches);
