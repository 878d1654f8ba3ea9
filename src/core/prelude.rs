#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;
#[allow(unused_imports)]
pub use num_traits::Zero;

#[allow(unused_imports)]
pub use tracing::{debug, error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{
        config::*,
        error::{MathError, Result},
    },
    util::{
        format::{ComponentLabels, VectorFormat, Wrap},
        length::{Length, LengthUnit},
        linalg,
        linalg::{Scalar, Vector2, Vector3, VectorLike},
        qm_scalar,
        random::RandomContext,
        shape::{
            is_point_inside, Ball, BoxShape, Circle2, Cuboid3, GenericShape2, Polygon2, Rect2,
            Shape, Sphere3,
        },
    },
};
