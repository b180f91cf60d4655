// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline(always)]
    pub fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}

#[derive(Clone)]
pub struct Strider {
    base: i16,
    step: i16,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: (row as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: col as i16,
            step: self.cols as i16,
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.rows).contains(&pos.row) && (0..self.cols).contains(&pos.col)
    }

    #[inline(always)]
    pub fn area(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn transposed(&self) -> Dim {
        Dim {
            rows: self.cols,
            cols: self.rows,
        }
    }

    // Copies a row-major buffer into the row-major buffer of the transposed dim.
    pub fn transpose_cells<T: Copy>(&self, cells: &[T]) -> Box<[T]> {
        let mut ret = Vec::with_capacity(cells.len());
        for col in 0..self.cols {
            let strider = self.down(col);
            ret.extend((0..strider.len()).map(|row| cells[strider.at(row)]));
        }
        ret.into_boxed_slice()
    }
}
