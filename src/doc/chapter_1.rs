/*!
# Expressions and Variables

Every value is a 64-bit floating point number. Variables are names
that refer to a value. A name starts with an ASCII letter or an
underbar (_) followed by letters, digits and underbars. Names are case
sensitive: `total` and `TOTAL` are two different variables.

A variable springs into existence the first time it is assigned.
Reading a variable that was never assigned is an `UNDEFINED VARIABLE`
error. A variable may hold `nan`, for example after `sqrt(-1)`, and
that is not an error.

```text
PI = 3.14159
R = 2
PRINT PI * R * R
12.56636
```

Literal numbers are written in decimal with an optional fraction and
an optional exponent.

```text
PRINT 1, 1.5, .5, 2E3, 3e-2
1 1.5 0.5 2000 0.03
```

## Operators

From highest to lowest precedence.

| Operators | Meaning                      |
|-----------|------------------------------|
| `+` `-`   | Unary plus and negation      |
| `*` `/`   | Multiplication and division  |
| `+` `-`   | Addition and subtraction     |

Operators of equal precedence are evaluated left to right, so
`8-4-2` is `2`. Parentheses group as usual. Dividing by zero is a
`DIVISION BY ZERO` error rather than an infinity.

## Comparisons

Comparisons are only allowed in an `IF` statement.

| Operator | Meaning                  |
|----------|--------------------------|
| `=`      | Equal                    |
| `<>`     | Not equal                |
| `<`      | Less than                |
| `<=`     | Less than or equal       |
| `>`      | Greater than             |
| `>=`     | Greater than or equal    |

The two character operators must be typed without a space between them.

## Reserved words

`END`, `FOR`, `GOSUB`, `GOTO`, `IF`, `NEXT`, `PRINT` and `RETURN` begin
statements. `THEN`, `TO` and `STEP` are used inside statements, and
`LIST`, `NEW` and `RUN` are commands. Reserved words may be typed in any
case and must be followed by a space or the end of the line. A reserved
word glued to other text is just a name, so `PRINTX` is a variable.
*/
