#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::{AddressSpace, MangleErrorKind, Primitive, Qualifiers};
use pretty_assertions::assert_eq;

fn prim(kind: Primitive) -> TypeId {
    TypeId::primitive(kind)
}

fn mangle_12(pool: &TypePool, name: &str, params: &[TypeId]) -> String {
    let fd = FunctionDescriptor::new(name, params.iter().copied());
    NameMangler::new(SpirVersion::V1_2).mangle(pool, &fd).unwrap()
}

fn seq_id(seq: u32) -> String {
    let mut out = String::new();
    push_seq_id(&mut out, seq);
    out
}

// -- Scalars and builtins --

#[test]
fn scalar_params() {
    let pool = TypePool::new();
    assert_eq!(mangle_12(&pool, "func", &[prim(Primitive::Int)]), "_Z4funci");
    assert_eq!(mangle_12(&pool, "func", &[prim(Primitive::Float)]), "_Z4funcf");
    assert_eq!(mangle_12(&pool, "func", &[prim(Primitive::Double)]), "_Z4funcd");
    assert_eq!(mangle_12(&pool, "abs", &[prim(Primitive::Int)]), "_Z3absi");
}

#[test]
fn no_params() {
    let pool = TypePool::new();
    assert_eq!(mangle_12(&pool, "barrier", &[]), "_Z7barrier");
}

#[test]
fn image_builtin() {
    let mut pool = TypePool::new();
    let float2 = pool.vector(prim(Primitive::Float), 2);
    let params = [prim(Primitive::Image2d), prim(Primitive::Sampler), float2];

    assert_eq!(
        mangle_12(&pool, "read_imagef", &params),
        "_Z11read_imagef11ocl_image2d11ocl_samplerDv2_f"
    );
}

#[test]
fn user_defined_types() {
    let mut pool = TypePool::new();
    let ty1 = pool.user_defined("myTy1");
    let ty2 = pool.user_defined("myTy2");

    assert_eq!(mangle_12(&pool, "myfunc", &[ty1, ty2]), "_Z6myfunc5myTy15myTy2");
}

// -- Vectors and pointers --

#[test]
fn vector_and_vector_pointer() {
    let mut pool = TypePool::new();
    let float2 = pool.vector(prim(Primitive::Float), 2);
    let int2 = pool.vector(prim(Primitive::Int), 2);
    let ptr = pool.pointer_with(int2, AddressSpace::Global, Qualifiers::empty());

    assert_eq!(
        mangle_12(&pool, "frexp", &[float2, ptr]),
        "_Z5frexpDv2_fPU3AS1Dv2_i"
    );
}

#[test]
fn repeated_vectors_are_not_substituted() {
    let mut pool = TypePool::new();
    let float16 = pool.vector(prim(Primitive::Float), 16);

    assert_eq!(
        mangle_12(&pool, "mask_fmax", &[prim(Primitive::UShort), float16, float16]),
        "_Z9mask_fmaxtDv16_fDv16_f"
    );
}

#[test]
fn repeated_pointer_is_substituted() {
    let mut pool = TypePool::new();
    let float16 = pool.vector(prim(Primitive::Float), 16);
    let ptr = pool.pointer(float16);
    let mut params = vec![float16; 6];
    params.extend([ptr, ptr, ptr]);

    assert_eq!(
        mangle_12(&pool, "soa_cross3", &params),
        "_Z10soa_cross3Dv16_fDv16_fDv16_fDv16_fDv16_fDv16_fPDv16_fS0_S0_"
    );
}

#[test]
fn address_spaces() {
    let mut pool = TypePool::new();
    let char2 = pool.vector(prim(Primitive::Char), 2);
    let local = pool.pointer_with(char2, AddressSpace::Local, Qualifiers::empty());
    let global = pool.pointer_with(char2, AddressSpace::Global, Qualifiers::CONST);
    let private = pool.pointer_with(char2, AddressSpace::Private, Qualifiers::empty());
    let constant = pool.pointer_with(char2, AddressSpace::Constant, Qualifiers::empty());

    assert_eq!(
        mangle_12(&pool, "async_work_group_copy", &[local, global, private, constant]),
        "_Z21async_work_group_copyPU3AS3Dv2_cPKU3AS1Dv2_cPDv2_cPU3AS2Dv2_c"
    );
}

#[test]
fn address_space_and_user_type() {
    let mut pool = TypePool::new();
    let mta = pool.user_defined("mta");
    let ptr = pool.pointer_with(mta, AddressSpace::Constant, Qualifiers::empty());

    assert_eq!(mangle_12(&pool, "myf", &[ptr]), "_Z3myfPU3AS23mta");
}

// -- Attribute order --

#[test]
fn qualifiers_in_canonical_order() {
    let mut pool = TypePool::new();
    let mut quals = Qualifiers::empty();
    quals.insert(Qualifiers::CONST);
    quals.insert(Qualifiers::RESTRICT);
    quals.insert(Qualifiers::VOLATILE);
    let ptr = pool.pointer_with(prim(Primitive::Int), AddressSpace::Constant, quals);

    assert_eq!(mangle_12(&pool, "func", &[ptr]), "_Z4funcPrVKU3AS2i");
}

#[test]
fn qualifier_subsets() {
    let mut pool = TypePool::new();
    let int = prim(Primitive::Int);
    let rk = Qualifiers::RESTRICT | Qualifiers::CONST;
    let constant = pool.pointer_with(int, AddressSpace::Constant, rk);
    let private = pool.pointer_with(int, AddressSpace::Private, rk);

    assert_eq!(mangle_12(&pool, "func", &[constant]), "_Z4funcPrKU3AS2i");
    assert_eq!(mangle_12(&pool, "func", &[private]), "_Z4funcPrKi");
}

#[test]
fn removed_qualifiers_are_not_emitted() {
    let mut pool = TypePool::new();
    let mut quals = Qualifiers::RESTRICT | Qualifiers::VOLATILE;
    quals.remove(Qualifiers::RESTRICT);
    quals.remove(Qualifiers::VOLATILE);
    let ptr = pool.pointer_with(prim(Primitive::Int), AddressSpace::Private, quals);

    assert_eq!(mangle_12(&pool, "func", &[ptr]), "_Z4funcPi");
}

// -- Substitutions --

#[test]
fn pointer_is_numbered_before_its_pointee() {
    let mut pool = TypePool::new();
    let ut = pool.user_defined("ut");
    let ptr = pool.pointer(ut);

    assert_eq!(mangle_12(&pool, "f", &[ptr, ut, ptr]), "_Z1fP2utS1_S0_");
}

#[test]
fn nested_pointers_number_outer_first() {
    let mut pool = TypePool::new();
    let inner = pool.pointer(prim(Primitive::Int));
    let outer = pool.pointer(inner);

    assert_eq!(mangle_12(&pool, "f", &[outer, inner]), "_Z1fPPiS1_");
    assert_eq!(mangle_12(&pool, "f", &[outer, outer]), "_Z1fPPiS0_");
}

#[test]
fn equal_but_distinct_nodes_are_not_substituted() {
    let mut pool = TypePool::new();
    let a = pool.user_defined("myTy1");
    let b = pool.user_defined("myTy1");
    let pa = pool.pointer(prim(Primitive::Float));
    let pb = pool.pointer(prim(Primitive::Float));

    assert!(pool.structurally_eq(a, b));
    assert_eq!(mangle_12(&pool, "f", &[a, b]), "_Z1f5myTy15myTy1");
    assert_eq!(mangle_12(&pool, "f", &[pa, pb]), "_Z1fPfPf");
}

#[test]
fn substitution_state_is_per_call() {
    let mut pool = TypePool::new();
    let ut = pool.user_defined("ut");
    let fd = FunctionDescriptor::new("f", [ut, ut]);
    let mangler = NameMangler::new(SpirVersion::V1_2);

    let first = mangler.mangle(&pool, &fd).unwrap();
    let second = mangler.mangle(&pool, &fd).unwrap();
    assert_eq!(first, "_Z1f2utS0_");
    assert_eq!(first, second);
}

#[test]
fn seq_ids_are_base_36() {
    assert_eq!(seq_id(0), "0");
    assert_eq!(seq_id(1), "1");
    assert_eq!(seq_id(9), "9");
    assert_eq!(seq_id(10), "A");
    assert_eq!(seq_id(35), "Z");
    assert_eq!(seq_id(36), "10");
    assert_eq!(seq_id(37), "11");
    assert_eq!(seq_id(1295), "ZZ");
    assert_eq!(seq_id(1296), "100");
    assert_eq!(seq_id(u32::MAX), "1Z141Z3");
}

// -- Revision gating --

#[test]
fn atomic_pointer_needs_2_0() {
    let mut pool = TypePool::new();
    let atomic = pool.atomic(prim(Primitive::Int));
    let ptr = pool.pointer_with(atomic, AddressSpace::Global, Qualifiers::VOLATILE);
    let fd = FunctionDescriptor::new("myfunc", [ptr, prim(Primitive::Int)]);

    assert_eq!(
        mangle(&pool, &fd, SpirVersion::V2_0).unwrap(),
        "_Z6myfuncPVU3AS1U7_Atomicii"
    );

    let err = mangle(&pool, &fd, SpirVersion::V1_2).unwrap_err();
    assert_eq!(err.kind(), MangleErrorKind::TypeNotSupported);
    assert_eq!(
        err.to_string(),
        "Type volatile __global atomic_int * is not supported in SPIR 1.2"
    );
}

#[test]
fn first_failing_parameter_is_reported() {
    let mut pool = TypePool::new();
    let generic = pool.pointer_with(prim(Primitive::Int), AddressSpace::Generic, Qualifiers::empty());
    let fd = FunctionDescriptor::new("f", [prim(Primitive::Float), prim(Primitive::Pipe), generic]);

    let err = mangle(&pool, &fd, SpirVersion::V1_2).unwrap_err();
    assert_eq!(
        err,
        MangleError::TypeNotSupported {
            ty: "pipe_t".to_string(),
            version: SpirVersion::V1_2,
        }
    );
}

#[test]
fn generic_address_space_needs_2_0() {
    let mut pool = TypePool::new();
    let ptr = pool.pointer_with(prim(Primitive::Int), AddressSpace::Generic, Qualifiers::empty());
    let fd = FunctionDescriptor::new("f", [ptr]);

    assert_eq!(mangle(&pool, &fd, SpirVersion::V2_0).unwrap(), "_Z1fPU3AS4i");
    assert_eq!(
        mangle(&pool, &fd, SpirVersion::V1_2).unwrap_err().to_string(),
        "Type __generic int * is not supported in SPIR 1.2"
    );
}

#[test]
fn failure_does_not_leak_into_next_call() {
    let mut pool = TypePool::new();
    let ut = pool.user_defined("ut");
    let queue = prim(Primitive::Queue);
    let mangler = NameMangler::new(SpirVersion::V1_2);

    let failing = FunctionDescriptor::new("f", [ut, queue]);
    assert!(mangler.mangle(&pool, &failing).is_err());

    let ok = FunctionDescriptor::new("g", [ut, ut]);
    assert_eq!(mangler.mangle(&pool, &ok).unwrap(), "_Z1g2utS0_");
}

// -- Blocks --

#[test]
fn blocks() {
    let mut pool = TypePool::new();
    let local = pool.pointer_with(prim(Primitive::Float), AddressSpace::Local, Qualifiers::empty());
    let two = pool.block([prim(Primitive::Int), local]);
    let fd = FunctionDescriptor::new("f", [two]);

    assert_eq!(
        mangle(&pool, &fd, SpirVersion::V2_0).unwrap(),
        "_Z1fU13block_pointerFviPU3AS3fE"
    );
}

#[test]
fn empty_block_is_a_void_block() {
    let mut pool = TypePool::new();
    let empty = pool.block([]);
    let void = pool.block([prim(Primitive::Void)]);
    let mangler = NameMangler::new(SpirVersion::V2_0);

    let empty_name = mangler
        .mangle(&pool, &FunctionDescriptor::new("f", [empty]))
        .unwrap();
    let void_name = mangler
        .mangle(&pool, &FunctionDescriptor::new("f", [void]))
        .unwrap();

    assert_eq!(empty_name, "_Z1fU13block_pointerFvvE");
    assert_eq!(empty_name, void_name);
    assert_eq!(pool.format_type(empty), pool.format_type(void));
}

#[test]
fn block_params_share_the_substitution_table() {
    let mut pool = TypePool::new();
    let ptr = pool.pointer(prim(Primitive::Int));
    let block = pool.block([ptr]);
    let fd = FunctionDescriptor::new("f", [ptr, block]);

    assert_eq!(
        mangle(&pool, &fd, SpirVersion::V2_0).unwrap(),
        "_Z1fPiU13block_pointerFvS0_E"
    );
}

#[test]
fn block_needs_2_0() {
    let mut pool = TypePool::new();
    let block = pool.block([prim(Primitive::Int), prim(Primitive::Float)]);
    let fd = FunctionDescriptor::new("myfunc", [block]);

    assert_eq!(
        mangle(&pool, &fd, SpirVersion::V2_0).unwrap(),
        "_Z6myfuncU13block_pointerFvifE"
    );
    assert_eq!(
        mangle(&pool, &fd, SpirVersion::V1_2).unwrap_err().to_string(),
        "Type void (int, float)* is not supported in SPIR 1.2"
    );
}

#[test]
fn enqueue_kernel_with_void_block() {
    let mut pool = TypePool::new();
    let block = pool.block([prim(Primitive::Void)]);
    let fd = FunctionDescriptor::new(
        "enqueue_kernel",
        [prim(Primitive::Queue), prim(Primitive::Int), prim(Primitive::NdRange), block],
    );

    assert_eq!(
        mangle(&pool, &fd, SpirVersion::V2_0).unwrap(),
        "_Z14enqueue_kernel9ocl_queuei9ndrange_tU13block_pointerFvvE"
    );
    assert_eq!(
        mangle(&pool, &fd, SpirVersion::V1_2).unwrap_err().to_string(),
        "Type queue_t is not supported in SPIR 1.2"
    );
}

// -- Pool ownership --

#[test]
#[should_panic(expected = "index out of bounds")]
fn handle_from_another_pool_panics() {
    let mut other = TypePool::new();
    let foreign = other.user_defined("elsewhere");
    let fd = FunctionDescriptor::new("f", [foreign]);

    let _ = mangle(&TypePool::new(), &fd, SpirVersion::V2_0);
}

#[test]
fn null_descriptor() {
    let pool = TypePool::new();
    let err = NameMangler::default()
        .mangle(&pool, &FunctionDescriptor::null())
        .unwrap_err();

    assert_eq!(err, MangleError::NullFunctionDescriptor);
    assert_eq!(err.kind(), MangleErrorKind::NullFunctionDescriptor);
    assert_eq!(err.to_string(), "<invalid>");
}
