/*!
# `<variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
There is no `LET` keyword. Variable names are case sensitive,
so `a` and `A` are different variables.

## Example
```text
10 A = 10
20 PRINT A
30 A = A * 2
40 PRINT A
RUN
10
20
```

*/
