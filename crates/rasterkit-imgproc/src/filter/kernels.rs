use rasterkit_image::{round_half_up, ImageError};

/// A 2D convolution kernel.
///
/// The coefficients are stored row-major and the kernel is always addressed with its center
/// at `(width / 2, height / 2)`. No normalization is enforced.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from row-major coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidKernelShape`] if a dimension is zero or the number of
    /// coefficients is not `width * height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_imgproc::filter::Kernel;
    ///
    /// let kernel = Kernel::new(3, 1, vec![0.25, 0.5, 0.25]).unwrap();
    /// assert_eq!(kernel.center(), (1, 0));
    /// ```
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<Self, ImageError> {
        if width == 0 || height == 0 || Some(data.len()) != width.checked_mul(height) {
            return Err(ImageError::InvalidKernelShape(width, height, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width of the kernel.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the kernel.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Offset of the kernel center, `(width / 2, height / 2)`.
    pub fn center(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    /// The coefficients in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Sum of all coefficients.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}

/// Mask size used for a gaussian of the given sigma when none is given, `4 * round(sigma) + 1`.
///
/// Always odd, so the kernel is centered on the origin.
pub fn gaussian_mask_size(sigma: f32) -> usize {
    (round_half_up(sigma) as usize)
        .saturating_mul(4)
        .saturating_add(1)
}

/// Create a square gaussian kernel.
///
/// The 2D gaussian `exp(-(i² + j²) / (2σ²))` is evaluated at the integer offsets
/// `i, j ∈ [-mask_size / 2, mask_size / 2]` and the coefficients are normalized to sum to 1.
///
/// # Arguments
///
/// * `sigma` - The standard deviation of the gaussian.
/// * `mask_size` - The width and height of the kernel.
///
/// # Errors
///
/// Returns [`ImageError::InvalidSigma`] if `sigma` is not positive and finite, and
/// [`ImageError::InvalidKernelSize`] if `mask_size` is zero or even.
pub fn gaussian_kernel_2d(sigma: f32, mask_size: usize) -> Result<Kernel, ImageError> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(ImageError::InvalidSigma(sigma));
    }

    if mask_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(mask_size));
    }

    let len = mask_size
        .checked_mul(mask_size)
        .ok_or(ImageError::InvalidKernelSize(mask_size))?;

    let mut data = alloc_coefficients(len)?;
    let half = (mask_size / 2) as i64;
    let two_sigma_sq = 2.0 * sigma * sigma;

    // the 1 / (2πσ²) factor cancels out in the normalization
    if two_sigma_sq.is_normal() {
        for i in -half..=half {
            for j in -half..=half {
                let d = (i * i + j * j) as f32;
                data.push((-d / two_sigma_sq).exp());
            }
        }

        let norm = data.iter().sum::<f32>();
        if norm.is_finite() && norm > 0.0 {
            data.iter_mut().for_each(|k| *k /= norm);
            return Kernel::new(mask_size, mask_size, data);
        }
    }

    // sigma too small to evaluate, use the limiting unit impulse
    data.clear();
    data.resize(len, 0.0);
    data[len / 2] = 1.0;

    Kernel::new(mask_size, mask_size, data)
}

/// Create a square box kernel with all coefficients equal to `1 / size²`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelSize`] if `size` is zero or even.
pub fn box_kernel_2d(size: usize) -> Result<Kernel, ImageError> {
    if size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(size));
    }
    let len = size
        .checked_mul(size)
        .ok_or(ImageError::InvalidKernelSize(size))?;
    let mut data = alloc_coefficients(len)?;
    data.resize(len, 1.0 / len as f32);
    Kernel::new(size, size, data)
}

// reserve kernel storage, reporting failure instead of aborting
fn alloc_coefficients(len: usize) -> Result<Vec<f32>, ImageError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| {
        ImageError::AllocationFailed(len.saturating_mul(std::mem::size_of::<f32>()))
    })?;
    Ok(data)
}
