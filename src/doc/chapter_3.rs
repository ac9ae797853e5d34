/*!
# Functions

Function names are case sensitive and the built-in functions are
lower case. An embedding program may add its own with
`Runtime::register_function`.
*/

pub mod abs {
    /*!
    ## `abs(X)` Returns the absolute value of X.
    ```text
    PRINT abs(-0.125)
    0.125
    ```
    */
}

pub mod ceil {
    /*!
    ## `ceil(X)` Returns the smallest integer not less than X.
    ```text
    PRINT ceil(1.2), ceil(-1.2)
    2 -1
    ```
    */
}

pub mod cos {
    /*!
    ## `cos(X)` Returns the cosine of X radians.
    ```text
    PRINT cos(0)
    1
    ```
    */
}

pub mod exp {
    /*!
    ## `exp(X)` Returns e raised to the power X.
    ```text
    PRINT exp(1)
    2.71828182845905
    ```
    */
}

pub mod floor {
    /*!
    ## `floor(X)` Returns the largest integer not greater than X.
    ```text
    PRINT floor(1.8), floor(-1.2)
    1 -2
    ```
    */
}

pub mod log {
    /*!
    ## `log(X)` Returns the natural logarithm of X.
    Zero and negative arguments give `nan`.
    ```text
    PRINT log(exp(2)), log(0)
    2 nan
    ```
    */
}

pub mod log10 {
    /*!
    ## `log10(X)` Returns the base 10 logarithm of X.
    Zero and negative arguments give `nan`.
    ```text
    PRINT log10(1000)
    3
    ```
    */
}

pub mod max {
    /*!
    ## `max(X, ...)` Returns the largest argument.
    Takes any number of arguments up to eight. With none it gives `nan`.
    ```text
    PRINT max(3, 9, 4)
    9
    ```
    */
}

pub mod min {
    /*!
    ## `min(X, ...)` Returns the smallest argument.
    Takes any number of arguments up to eight. With none it gives `nan`.
    ```text
    PRINT min(3, 9, 4)
    3
    ```
    */
}

pub mod pow {
    /*!
    ## `pow(X, Y)` Returns X raised to the power Y.
    ```text
    PRINT pow(2, 10)
    1024
    ```
    */
}

pub mod sin {
    /*!
    ## `sin(X)` Returns the sine of X radians.
    ```text
    PRINT sin(0)
    0
    ```
    */
}

pub mod sqrt {
    /*!
    ## `sqrt(X)` Returns the square root of X.
    Negative arguments give `nan`.
    ```text
    PRINT sqrt(2)
    1.4142135623731
    ```
    */
}

pub mod tan {
    /*!
    ## `tan(X)` Returns the tangent of X radians.
    ```text
    PRINT tan(0)
    0
    ```
    */
}
